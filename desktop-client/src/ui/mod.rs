mod app;
mod board;
mod palette;

pub use app::TicTacToeApp;
