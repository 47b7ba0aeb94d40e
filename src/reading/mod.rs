/// Reading domain - outcome and policy types, free of I/O
pub mod domain;
