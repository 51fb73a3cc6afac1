pub mod capacity;
pub mod generator;
pub mod instance_store;
pub mod item;
pub mod knapsack_instance;
pub mod line_file_store;
