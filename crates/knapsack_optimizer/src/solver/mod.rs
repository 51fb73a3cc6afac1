pub mod candidate;
pub mod construction;
pub mod evaluation;
pub mod hill_climbing;
pub mod neighborhood;
pub mod search_outcome;
pub mod solver_params;
