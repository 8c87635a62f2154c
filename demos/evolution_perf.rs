//! Quick evolution performance test

use redos_hunter::{
    EvolutionEngine,
    compute::evolution::BacktrackTimer,
    schema::{SearchConfig, Token, TokenType, generate_seeds},
};
use std::time::Instant;

fn main() {
    println!("=== Evolution Performance Test ===\n");

    let tokens = vec![
        Token::new(TokenType::GroupOpen, "("),
        Token::new(TokenType::Literal, "a"),
        Token::new(TokenType::Quantifier, "+"),
        Token::new(TokenType::GroupClose, ")"),
        Token::new(TokenType::QuantifierModifier, "+"),
        Token::new(TokenType::Anchor, "$"),
    ];

    // Test different ceilings
    for timeout_seconds in [0.01, 0.05, 0.2] {
        println!("Ceiling: {}s", timeout_seconds);

        let config = SearchConfig {
            timeout_seconds,
            max_minutes: 1.0,
            survivor_count: 10,
            random_seed: Some(42),
            ..Default::default()
        };
        let timer = BacktrackTimer::new("(a+)+$", &config).unwrap();

        let start = Instant::now();
        let mut engine = EvolutionEngine::new(config, &timer);
        let result = engine.run(generate_seeds(&tokens));
        let finals = engine.amplify(&result);
        let elapsed = start.elapsed();

        println!("  Generations:    {}", result.generations);
        println!("  Stop reason:    {:?}", result.stop_reason);
        println!("  Elapsed:        {:.2}s", elapsed.as_secs_f64());
        println!(
            "  Peak time:      {:.4}s",
            result.track.peak().unwrap_or_default()
        );
        if let Some(slowest) = finals.iter().max_by(|a, b| a.time.total_cmp(&b.time)) {
            println!("  Slowest input:  {:?}", slowest.candidate);
        }
        println!();
    }

    println!("=== Scalability Test (fixed 0.05s ceiling) ===\n");

    // Test different survivor counts
    for survivor_count in [5, 10, 20, 40] {
        let config = SearchConfig {
            timeout_seconds: 0.05,
            survivor_count,
            max_generations: Some(20),
            random_seed: Some(42),
            ..Default::default()
        };
        let timer = BacktrackTimer::new("(a+)+$", &config).unwrap();

        let start = Instant::now();
        let mut engine = EvolutionEngine::new(config, &timer);
        let result = engine.run(generate_seeds(&tokens));
        let elapsed = start.elapsed();

        println!(
            "Survivors {}: {} generations in {:.2}s ({:.1} generations/sec)",
            survivor_count,
            result.generations,
            elapsed.as_secs_f64(),
            result.generations as f64 / elapsed.as_secs_f64()
        );
    }
}
