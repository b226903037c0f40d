pub mod dotenv_source;
