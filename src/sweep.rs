use std::str::FromStr;

use itertools::iproduct;
use strum_macros::{ Display, EnumString };

use crate::{ config::Config, debugger };

/// ミラーリングモード
/// パスのセグメントと表示ラベルのテンプレートを決める二値のバリアント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum MirrorMode {
    Mirrored,
    Generic,
}

impl MirrorMode {
    /// sinalgoへ渡すmirroredフラグの表現
    pub fn as_flag(&self) -> &'static str {
        match self {
            MirrorMode::Mirrored => "true",
            MirrorMode::Generic => "false",
        }
    }
}

/// 1回のシミュレーションを定める実験パラメータの組
/// 掃引時に生成され、以後は不変
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentParams {
    pub project: String,
    pub num_nodes: usize,
    /// 置換後のスイッチサイズ
    pub switch_size: usize,
    pub skew_x: String,
    pub skew_y: String,
    pub sim_id: usize,
    pub mirror: MirrorMode,
    pub sequential: bool,
    pub mu: usize,
}

impl ExperimentParams {
    /// skew係数の組から決まるデータセットのタグ
    pub fn dataset(&self) -> String {
        format!("{}-{}", self.skew_x, self.skew_y)
    }
}

/// スイッチサイズの実効値を決定する
/// -1は「無制限」のセンチネルで、2*ノード数に置換してそのまま採用する
/// それ以外は3つの棄却規則を順に適用し、該当すればNoneを返す
pub fn resolve_switch_size(switch_size: i64, num_nodes: usize) -> Option<usize> {
    if switch_size == -1 {
        return Some(2 * num_nodes);
    }

    if switch_size == 256 && num_nodes == 128 {
        return None;
    }

    if switch_size <= 16 && num_nodes >= 256 {
        return None;
    }

    if switch_size <= 64 && num_nodes >= 512 {
        return None;
    }

    Some(switch_size as usize)
}

/// 設定された全軸の直積を列挙し、棄却規則を通過した組のみを生成順で返す
pub fn generate(config: &Config) -> Vec<ExperimentParams> {
    let sweep = &config.sweep;

    let mirrors: Vec<MirrorMode> = sweep.mirrored
        .iter()
        .map(|m| {
            match MirrorMode::from_str(m) {
                Ok(mode) => mode,
                Err(_) => panic!("Invalid `mirrored`: {}", m),
            }
        })
        .collect();

    let mut params_list = vec![];

    for (project, num_nodes, skew_x, skew_y, sim_id, switch_size, mu, mirror, sequential) in iproduct!(
        &sweep.projects,
        &sweep.num_nodes,
        &sweep.skew_x,
        &sweep.skew_y,
        1..=sweep.num_simulations,
        &sweep.switch_sizes,
        &sweep.mus,
        &mirrors,
        &sweep.sequential
    ) {
        let switch_size = match resolve_switch_size(*switch_size, *num_nodes) {
            Some(size) => size,
            None => {
                debugger::log_skip(config, project, *num_nodes, *switch_size);
                continue;
            }
        };

        params_list.push(ExperimentParams {
            project: project.clone(),
            num_nodes: *num_nodes,
            switch_size,
            skew_x: skew_x.clone(),
            skew_y: skew_y.clone(),
            sim_id,
            mirror: *mirror,
            sequential: *sequential,
            mu: *mu,
        });
    }

    params_list
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_switches_rejected_on_large_networks() {
        // cbOptNet, 128ノード, スイッチ16は採用
        assert_eq!(resolve_switch_size(16, 128), Some(16));
        // 256ノードではスイッチ16は棄却
        assert_eq!(resolve_switch_size(16, 256), None);
        assert_eq!(resolve_switch_size(8, 300), None);

        assert_eq!(resolve_switch_size(64, 512), None);
        assert_eq!(resolve_switch_size(64, 511), Some(64));

        assert_eq!(resolve_switch_size(256, 128), None);
        assert_eq!(resolve_switch_size(256, 256), Some(256));
    }

    #[test]
    fn sentinel_expands_to_twice_the_node_count() {
        // -1は他の規則を通さず常に採用される
        assert_eq!(resolve_switch_size(-1, 128), Some(256));
        assert_eq!(resolve_switch_size(-1, 512), Some(1024));
    }

    #[test]
    fn generation_covers_exactly_the_feasible_product() {
        let mut config = crate::config::Config::test_default();
        config.sweep.projects = vec!["cbOptNet".to_string()];
        config.sweep.num_nodes = vec![128, 256];
        config.sweep.switch_sizes = vec![16, 128];
        config.sweep.sequential = vec![false];
        config.sweep.mirrored = vec!["mirrored".to_string(), "generic".to_string()];
        config.sweep.mus = vec![4];
        config.sweep.skew_x = vec!["1".to_string()];
        config.sweep.skew_y = vec!["0.4".to_string()];
        config.sweep.num_simulations = 3;

        let params_list = generate(&config);

        // (128, 16), (128, 128), (256, 128)が採用され、(256, 16)は棄却される
        // 3組 * sim 3回 * mirror 2通り
        assert_eq!(params_list.len(), 3 * 3 * 2);
        assert!(
            params_list
                .iter()
                .all(|p| !(p.switch_size == 16 && p.num_nodes == 256))
        );

        // 生成順は直積の列挙順に一致する
        let first = &params_list[0];
        assert_eq!(first.sim_id, 1);
        assert_eq!(first.num_nodes, 128);
        assert_eq!(first.mirror, MirrorMode::Mirrored);
    }

    #[test]
    fn dataset_tag_joins_skew_coefficients() {
        let mut config = crate::config::Config::test_default();
        config.sweep.num_simulations = 1;
        let params = &generate(&config)[0];
        assert_eq!(params.dataset(), "1-0.4");
    }
}
