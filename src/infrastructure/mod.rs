pub mod exec;
pub mod logfile;
