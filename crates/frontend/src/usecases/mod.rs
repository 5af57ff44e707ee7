pub mod u501_query_console;
