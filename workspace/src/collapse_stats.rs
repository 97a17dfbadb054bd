use itertools::Itertools;
use braket_sim::{
    gate,
    ket::Ket,
    sample::{ Sampler, SamplerConfig },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() {
    const INPUT: [u8; 3] = [0, 1, 1];
    const SHOTS: usize = 4000;
    const SEED: Option<u64> = Some(10546);
    const BAR_WIDTH: f64 = 200.0;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let psi = &gate::fourier(INPUT.len()) * &Ket::from_bits(INPUT);
    println!("QFT ∣{}⟩:", INPUT.iter().join(""));
    println!("{}", psi);

    let probs = psi.probabilities();
    println!(
        "expected: [{}]",
        probs.iter().map(|p| format!("{:.3}", p)).join(", "),
    );

    let mut sampler = Sampler::new(SamplerConfig { shots: SHOTS, seed: SEED });
    let counts = sampler.run(&psi);
    info!(shots = counts.shots(), distinct = counts.len(), "sampled");

    let mut max_dev: f64 = 0.0;
    for (outcome, n) in counts.sorted() {
        let freq = counts.frequency(outcome);
        let expected = probs[outcome.to_index()];
        max_dev = max_dev.max((freq - expected).abs());
        println!(
            "{} {:>6} {:.4} (expected {:.4}) {}",
            outcome,
            n,
            freq,
            expected,
            "#".repeat((freq * BAR_WIDTH).round() as usize),
        );
    }
    println!("max deviation: {:.4}", max_dev);
}
