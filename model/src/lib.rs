pub mod rename;
