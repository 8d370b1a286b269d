pub mod write_atomically;
