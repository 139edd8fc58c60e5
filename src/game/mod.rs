pub mod oracle;
pub mod tictactoe; // Reference oracle used by the demo binary and integration tests
