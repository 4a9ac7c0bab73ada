pub mod line_reporter;
