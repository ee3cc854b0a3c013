//! OptNet Sweep
//!
//! 光スイッチネットワークシミュレータ (sinalgo) の実験支援ツール
//!
//! ## モード
//!
//! - sweep: パラメータ掃引と固定ワーカプールでの一括実行
//! - verify: 完了済みシミュレーションの検証と後始末
//! - plot: 結果の集計と論文用の図の出力

mod analysis;
mod command;
mod config;
mod debugger;
mod parameters;
mod runner;
mod sweep;
mod utils;

use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = if args.len() == 2 {
        config::Config::new(&args[1])
    } else {
        config::Config::new("./config.toml")
    };

    // Thread Checking
    let num_threads = num_cpus::get();
    if num_threads < config.runner.num_threads {
        eprintln!(
            "[WARNING] num_threads: {} is larger than num_cpus: {}.",
            config.runner.num_threads,
            num_threads
        );
    }

    match config.simulation.mode.to_uppercase().as_str() {
        "SWEEP" => runner::main(&config),
        "VERIFY" => runner::verify::main(&config),
        "PLOT" => analysis::main(&config),
        _ => panic!("Invalid `mode`"),
    }
}
