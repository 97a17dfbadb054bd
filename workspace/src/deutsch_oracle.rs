use braket_sim::{
    gate,
    ket::Ket,
    operator::Operator,
    sample::{ Bit, Sampler },
};
use tracing::info;
use tracing_subscriber::EnvFilter;

// oracles U_f ∣x, y⟩ = ∣x, y ⊕ f(x)⟩
fn oracles() -> Vec<(&'static str, Operator)> {
    vec![
        ("f(x) = 0", gate::identity() + gate::identity()),
        ("f(x) = 1", gate::identity() + gate::not()),
        ("f(x) = x", gate::cnot()),
        ("f(x) = !x", &(gate::identity() + gate::not()) * &gate::cnot()),
    ]
}

fn main() {
    const SEED: u64 = 10546;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sampler = Sampler::seeded(SEED);
    let flip = gate::not() + gate::not();
    let hh = gate::hadamard() + gate::hadamard();

    for (name, oracle) in oracles() {
        println!("oracle: {}", name);
        let psi = Ket::from_bits([0_u8, 0]);
        println!("initial:\n{}", psi);
        let psi = &flip * &psi;
        println!("after NOT ⊗ NOT:\n{}", psi);
        let psi = &hh * &psi;
        println!("after H ⊗ H:\n{}", psi);
        let psi = &oracle * &psi;
        println!("after oracle:\n{}", psi);
        let mut psi = &hh * &psi;
        println!("after H ⊗ H:\n{}", psi);

        let outcome = sampler.collapse(&mut psi);
        // the first bit reads 1 for a constant f and 0 for a balanced one
        let verdict = match outcome.bits().first() {
            Some(Bit::One) => "constant",
            Some(Bit::Zero) => "balanced",
            None => "undetermined",
        };
        info!(oracle = name, %outcome, verdict, "collapsed");
        println!("outcome: {} => {}\n", outcome, verdict);
    }
}
