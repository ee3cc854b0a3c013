use std::fmt;
use std::fs;

use crate::{ config::Config, parameters::SIM_LOG_NAME, sweep::ExperimentParams };

/// 1回のシミュレーション起動を表すコマンド
/// ExperimentParamsと一対一に対応し、生成後は不変
#[derive(Debug, Clone, PartialEq)]
pub struct SimCommand {
    pub program: String,
    pub args: Vec<String>,
    /// シミュレータの出力ディレクトリ
    pub output_dir: String,
    /// 標準出力のリダイレクト先
    pub sim_log: String,
}

impl SimCommand {
    /// パラメータの組からコマンドを組み立てる
    /// 同じパラメータからは常に同じコマンド文字列が得られる
    pub fn new(config: &Config, params: &ExperimentParams) -> SimCommand {
        let dataset = params.dataset();

        let input_file = format!(
            "input/bursty/{}/{}/{}_tor_{}.txt",
            dataset,
            params.num_nodes,
            params.sim_id,
            params.num_nodes
        );

        let output_dir = format!(
            "output/skewed-{}/{}_{}/{}/{}/{}/{}/",
            dataset,
            params.project,
            params.num_nodes,
            params.switch_size,
            params.mirror,
            params.mu,
            params.sim_id
        );

        let sim_log = format!("logs/{}{}", output_dir, SIM_LOG_NAME);

        let args = vec![
            "-cp".to_string(),
            config.simulation.classpath.clone(),
            config.simulation.program.clone(),
            "-batch".to_string(),
            "-project".to_string(),
            params.project.clone(),
            "-overwrite".to_string(),
            format!("mu={}", params.mu),
            format!("input={}", input_file),
            format!("switchSize={}", params.switch_size),
            format!("output={}", output_dir),
            format!("isSequential={}", params.sequential),
            format!("mirrored={}", params.mirror.as_flag()),
            "AutoStart=true".to_string()
        ];

        SimCommand {
            program: config.simulation.java_path.clone(),
            args,
            output_dir,
            sim_log,
        }
    }

    /// 出力ディレクトリとログディレクトリを作成する
    /// 既に存在していても失敗しない
    pub fn prepare_dirs(&self) {
        for dir in [self.output_dir.clone(), format!("logs/{}", self.output_dir)] {
            match fs::create_dir_all(&dir) {
                Ok(_) => (),
                Err(_) => panic!("ディレクトリの作成に失敗しました (権限?)"),
            }
        }
    }
}

impl fmt::Display for SimCommand {
    /// コンソール出力と失敗ログに使うシェル形式の1行
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} > {}", self.program, self.args.join(" "), self.sim_log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::MirrorMode;

    fn sample_params() -> ExperimentParams {
        ExperimentParams {
            project: "cbOptNet".to_string(),
            num_nodes: 128,
            switch_size: 16,
            skew_x: "1".to_string(),
            skew_y: "0.4".to_string(),
            sim_id: 1,
            mirror: MirrorMode::Mirrored,
            sequential: false,
            mu: 4,
        }
    }

    #[test]
    fn command_text_is_deterministic() {
        let config = Config::test_default();
        let params = sample_params();

        let command = SimCommand::new(&config, &params);

        assert_eq!(
            command.to_string(),
            "java -cp binaries/bin:binaries/jdom.jar sinalgo.Run -batch -project cbOptNet \
             -overwrite mu=4 input=input/bursty/1-0.4/128/1_tor_128.txt switchSize=16 \
             output=output/skewed-1-0.4/cbOptNet_128/16/mirrored/4/1/ isSequential=false \
             mirrored=true AutoStart=true \
             > logs/output/skewed-1-0.4/cbOptNet_128/16/mirrored/4/1/sim.txt"
        );

        assert_eq!(command, SimCommand::new(&config, &params));
    }

    #[test]
    fn generic_mode_switches_path_segment_and_flag() {
        let config = Config::test_default();
        let mut params = sample_params();
        params.mirror = MirrorMode::Generic;
        params.sim_id = 7;

        let command = SimCommand::new(&config, &params);

        assert_eq!(command.output_dir, "output/skewed-1-0.4/cbOptNet_128/16/generic/4/7/");
        assert!(command.args.contains(&"mirrored=false".to_string()));
        assert_eq!(command.sim_log, "logs/output/skewed-1-0.4/cbOptNet_128/16/generic/4/7/sim.txt");
    }
}
