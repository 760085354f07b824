pub mod config;
pub mod display;
pub mod filter;
pub mod mock_data;
pub mod state;
