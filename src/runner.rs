use std::fs::File;
use std::process::{ Command, Stdio };
use std::thread;

use indicatif::{ ProgressBar, ProgressStyle };

use crate::{
    command::SimCommand,
    config::Config,
    debugger,
    parameters::{ PB_CHARS, PB_TEMPLATES },
    sweep,
    utils::chunk_evenly,
};

pub mod logger;
pub mod verify;

use logger::ResultLogger;

/// sweepモードのエントリポイント
/// 掃引->コマンド生成->プール実行、の順で1回だけ走る
pub fn main(config: &Config) {
    let params_list = sweep::generate(config);

    // コマンドはパラメータの組と一対一、生成時にディレクトリも用意する
    let commands: Vec<SimCommand> = params_list
        .iter()
        .map(|params| {
            let command = SimCommand::new(config, params);
            command.prepare_dirs();
            command
        })
        .collect();

    let logger = ResultLogger::open(&config.runner.log_path, &config.runner.log_file);

    run_pool(config, &commands, &logger);

    println!("Simulation Completed");
}

/// 固定数のワーカスレッドで全コマンドを実行する
/// ワーカ数はmin(設定スレッド数, コマンド数)
/// コマンドが0件ならワーカを作らず即完了する
/// 各ワーカは割り当てられた連続スライスを先頭から順に同期実行し、
/// 全ワーカのjoinが終わるまでこの関数は返らない
pub fn run_pool(config: &Config, commands: &[SimCommand], logger: &ResultLogger) {
    if commands.is_empty() {
        debugger::log_alert("No experiment to be executed");
        return;
    }

    let num_threads = config.runner.num_threads.min(commands.len());
    let chunks = chunk_evenly(commands, num_threads);

    let pb = ProgressBar::new(commands.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar().template(PB_TEMPLATES).unwrap().progress_chars(PB_CHARS)
    );

    thread::scope(|scope| {
        for chunk in &chunks {
            let pb = pb.clone();
            scope.spawn(move || {
                for command in chunk {
                    execute(config, command, logger);
                    pb.inc(1);
                }
            });
        }
    });

    pb.finish();
}

/// 1コマンドを同期実行し、完了後に成功マーカを確認する
/// マーカがなければ失敗ログへ記録するだけで、ワーカは次のコマンドへ進む
/// タイムアウトは設けていないため、ハングしたシミュレータはそのワーカを塞ぐ
fn execute(config: &Config, command: &SimCommand, logger: &ResultLogger) {
    debugger::log_command(config, &command.to_string());

    let sim_log = match File::create(&command.sim_log) {
        Ok(file) => file,
        Err(_) => panic!("シミュレーションログを作成できませんでした (ディレクトリ未作成?)"),
    };

    match Command::new(&command.program).args(&command.args).stdout(Stdio::from(sim_log)).spawn() {
        Ok(mut child) => {
            child.wait().unwrap();
        }
        // 起動自体の失敗もマーカ確認に落ちて失敗として記録される
        Err(_) => debugger::log_alert(&format!("起動に失敗しました: {}", command.program)),
    }

    if !logger::check_sim(&command.sim_log) {
        debugger::log_failure(config, &command.to_string());
        logger.append(&format!("Error with {}", command));
    }
}
