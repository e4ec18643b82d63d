use serde::de::DeserializeOwned;
use strum::IntoEnumIterator;
use strum::{Display, EnumIter};

pub mod aws_client_config;

#[derive(Clone, Eq, PartialEq, EnumIter, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Environment {
    Local,
    Development,
    QA,
    Staging,
    Production,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads the test configuration. Used by unit and integration tests.
    ///
    /// This will load the following files, in order:
    ///  - OS environment variables
    ///  - .env.test.local
    ///  - .env.test
    ///  - .env.local
    ///  - .env
    ///
    /// Variables are not overriden, the first file to contain
    /// a definition for a variable is the one that will be set.
    pub fn load_test<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.test.local").ok();
        dotenv::from_filename(".env.test").ok();
        ConfigLoader::load::<TConfig>()
    }

    /// Loads the configuration used by the deployed lambdas.
    ///
    /// This will load the following files, in order:
    /// - OS environment variables
    /// - `.env.development.local` then `.env.development`
    /// - `.env.qa.local` then `.env.qa`
    /// - `.env.staging.local` then `.env.staging`
    /// - `.env.production.local` then `.env.production`
    /// - `.env.local`
    /// - `.env`
    ///
    /// If a variable is set in the OS environment, it will not be
    /// overriden by any file.
    pub fn load_default<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        for environment in Environment::iter() {
            if environment != Environment::Local {
                dotenv::from_filename(format!(".env.{environment}.local")).ok();
                dotenv::from_filename(format!(".env.{environment}")).ok();
            }
        }

        ConfigLoader::load::<TConfig>()
    }

    fn load<TConfig>() -> TConfig
    where
        TConfig: DeserializeOwned,
    {
        dotenv::from_filename(".env.local").ok();
        dotenv::from_filename(".env").ok();

        envy::from_env::<TConfig>().unwrap_or_else(|e| panic!("Could not load configuration: {e}"))
    }
}
