use std::fs;
use std::path::Path;

use crate::{ config::Config, debugger, parameters::{ SIM_LOG_NAME, SIM_LOG_ROOT } };

use super::logger::{ check_sim, ResultLogger };

/// verifyモードのエントリポイント
/// 完了済みシミュレーションのログを走査し、成功分を削除、失敗分を記録する
pub fn main(config: &Config) {
    let logger = ResultLogger::open(&config.runner.log_path, &config.runner.log_file);
    ensure_simulations(config, Path::new(SIM_LOG_ROOT), &logger);
}

/// サブディレクトリを再帰的に辿り、sim.txtを持つ各ディレクトリを検査する
/// 成功マーカがあればログを削除し、なければ失敗ログへ1行追記する
pub fn ensure_simulations(config: &Config, root: &Path, logger: &ResultLogger) {
    let sim_log = root.join(SIM_LOG_NAME);

    if sim_log.is_file() {
        let subdir = root.to_string_lossy();

        if check_sim(sim_log.to_str().unwrap()) {
            fs::remove_file(&sim_log).unwrap();
            debugger::log_verify(config, &subdir, true);
        } else {
            debugger::log_verify(config, &subdir, false);
            logger.append(&format!("Failed simulation at {}", subdir));
        }
    }

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            ensure_simulations(config, &path, logger);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("optnet_verify_{}_{}", tag, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn walk_removes_successful_logs_and_records_failures() {
        let config = Config::test_default();
        let root = temp_dir("walk");

        let ok_dir = root.join("output/run_a/1");
        let bad_dir = root.join("output/run_b/2");
        fs::create_dir_all(&ok_dir).unwrap();
        fs::create_dir_all(&bad_dir).unwrap();

        fs::write(ok_dir.join(SIM_LOG_NAME), "12 rotations performed").unwrap();
        fs::write(bad_dir.join(SIM_LOG_NAME), "simulation aborted").unwrap();

        let log_dir = root.join("logs");
        let logger = ResultLogger::open(log_dir.to_str().unwrap(), "failed.txt");

        ensure_simulations(&config, &root, &logger);

        // 成功分のログは削除され、失敗分は残る
        assert!(!ok_dir.join(SIM_LOG_NAME).exists());
        assert!(bad_dir.join(SIM_LOG_NAME).exists());

        let contents = fs::read_to_string(log_dir.join("failed.txt")).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], format!("Failed simulation at {}", bad_dir.display()));
    }
}
