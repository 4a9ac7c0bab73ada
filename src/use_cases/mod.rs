pub mod generate_load;
