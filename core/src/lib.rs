pub mod configfile;
pub mod mongo;
