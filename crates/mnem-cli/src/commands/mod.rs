pub mod config_ops;
pub mod dict_ops;
pub mod match_ops;
pub mod peg_ops;
