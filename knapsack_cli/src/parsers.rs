use knapsack_optimizer::solver::solver_params::Threads;

pub fn parse_threads(input: &str) -> Result<Threads, String> {
    match input.trim() {
        "auto" => Ok(Threads::Auto),
        "1" => Ok(Threads::Single),
        other => match other.parse::<usize>() {
            Ok(0) | Err(_) => Err(String::from(
                "Invalid threads, expected \"auto\" or a positive number",
            )),
            Ok(threads) => Ok(Threads::Multi(threads)),
        },
    }
}
