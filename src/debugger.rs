use console::style;

use crate::config::Config;

pub fn log_alert(msg: &str) {
    println!("{:>8}| {}", style("ALERT").red(), style(msg).bold());
}

/// 実行直前のコマンドを出力する
pub fn log_command(config: &Config, command: &str) {
    if config.debug.log_command {
        println!("{:>8}| {}", style("EXEC").green(), command);
    }
}

/// 成功マーカが見つからなかったシミュレーションを出力する
pub fn log_failure(config: &Config, command: &str) {
    if config.debug.log_failure {
        println!("{:>8}| {}", style("FAILED").red(), command);
    }
}

/// 掃引で棄却された組合せを出力する
pub fn log_skip(config: &Config, project: &str, num_nodes: usize, switch_size: i64) {
    if config.debug.log_skip {
        println!(
            "{:>8}| {} n={} sw={}",
            style("SKIP").yellow(),
            project,
            num_nodes,
            switch_size
        );
    }
}

/// verifyモードの走査結果を出力する
pub fn log_verify(config: &Config, subdir: &str, ok: bool) {
    if config.debug.log_verify {
        if ok {
            println!("{:>8}| {}", style("OK").blue(), subdir);
        } else {
            println!("{:>8}| {}", style("FAILED").red(), subdir);
        }
    }
}
