pub mod accept_neighbor;
pub mod steepest_ascent_acceptor;
