use serde_derive::{ Deserialize, Serialize };

use std::fs;

use crate::utils;

mod debug_config;
mod plot_config;
mod runner_config;
mod simulation_config;
mod sweep_config;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub simulation: simulation_config::SimulationConfig,
    pub sweep: sweep_config::SweepConfig,
    pub runner: runner_config::RunnerConfig,
    pub plot: plot_config::PlotConfig,
    pub debug: debug_config::DebugConfig,
}

impl Config {
    /// Config構造体を作成する
    /// toml形式で書くこと．
    pub fn new(file_name: &str) -> Config {
        // configファイルを文字列として読込
        match utils::read_file(file_name) {
            Ok(contents) => {
                // 文字列をTOMLファイルとして読込
                match toml::from_str(&contents) {
                    Ok(config) => config,
                    Err(_) => panic!("TOMLファイルのパースに失敗しました。"),
                }
            }
            Err(_) => panic!("ファイルの読込に失敗しました。"),
        }
    }

    /// config構造体を実行時のスナップショットとしてファイルに残す
    /// config構造体->TOMLデータ->文字列->ファイル
    pub fn save_snapshot(&self, output_dir: &str) {
        match toml::Value::try_from(self) {
            Ok(toml_data) =>
                match toml::to_string_pretty(&toml_data) {
                    Ok(toml_string) => {
                        match fs::write(format!("{}/config.toml", output_dir), toml_string) {
                            Ok(_) => (),
                            Err(_) => panic!("TOML文字列をファイルに書き込めませんでした"),
                        }
                    }
                    Err(_) => panic!("TOMLデータを文字列に変換できませんでした"),
                }
            Err(err) => panic!("構造体をTOMLデータに変換できませんでした: {}", err),
        }
    }

    /// テスト用の既定値
    #[cfg(test)]
    pub fn test_default() -> Config {
        let contents = r#"
            [simulation]
            mode = "sweep"
            java_path = "java"
            classpath = "binaries/bin:binaries/jdom.jar"
            program = "sinalgo.Run"

            [sweep]
            projects = ["cbOptNet"]
            num_nodes = [128]
            switch_sizes = [16]
            sequential = [false]
            mirrored = ["mirrored", "generic"]
            mus = [4]
            skew_x = ["1"]
            skew_y = ["0.4"]
            num_simulations = 30

            [runner]
            num_threads = 2
            log_path = "./scripts/logs/"
            log_file = "skewedLog.txt"

            [plot]
            data_root = "output"
            outdir = "output"
            run_label = "test"
            projects = ["cbOptNet"]
            datasets = ["skewed-1-0.4"]
            switch_sizes = [16]
            mirrored = ["mirrored", "generic"]
            num_nodes = 128
            mus = [4]
            num_simulations = 30
            normalize = 1e4

            [debug]
            log_command = false
            log_failure = false
            log_skip = false
            log_verify = false
        "#;

        match toml::from_str(contents) {
            Ok(config) => config,
            Err(err) => panic!("test_defaultのパースに失敗しました: {}", err),
        }
    }
}
