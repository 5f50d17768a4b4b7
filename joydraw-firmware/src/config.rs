//! Board configuration generated from board.toml by build.rs

use joydraw_core::config::BoardConfig;

include!(concat!(env!("OUT_DIR"), "/board_config.rs"));
