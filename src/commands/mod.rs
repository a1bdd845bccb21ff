pub mod init;
pub mod tree;
