use std::fs;
use std::str::FromStr;

use itertools::iproduct;

use crate::{ config::Config, debugger, sweep::{ self, MirrorMode }, utils };

pub mod aggregate;
pub mod chart;
pub mod reader;

use aggregate::WorkComponent;
use chart::CdfKind;
use reader::DataReader;

/// plotモードのエントリポイント
/// 設定された軸の組合せごとに読込器を作り、論文用の図を一式出力する
pub fn main(config: &Config) {
    let plot = &config.plot;

    let run_label = if plot.run_label.is_empty() {
        utils::generate_id()
    } else {
        plot.run_label.clone()
    };

    let outdir = format!("{}/{}", plot.outdir, run_label);
    match fs::create_dir_all(&outdir) {
        Ok(_) => (),
        Err(_) => panic!("ディレクトリの作成に失敗しました (権限?)"),
    }
    config.save_snapshot(&outdir);

    let readers = build_readers(config);

    // Work分解の積み上げ棒グラフ、3種類の分解それぞれ
    for component in [
        WorkComponent::Rotations,
        WorkComponent::LinkUpdates,
        WorkComponent::SwitchUpdates
    ] {
        let breakdown = aggregate::total_work(&readers, component, plot.normalize);
        let filepath = format!("{}/total_work_{}.png", outdir, component);

        match chart::render_work_breakdown(&breakdown, component, &filepath) {
            Ok(_) => (),
            Err(_) => panic!("図の出力に失敗しました: {}", filepath),
        }
    }

    // ECDF、全グループのスイッチ統計とオブジェクト統計をまとめて1標本にする
    let mut active_rounds = vec![];
    let mut port_active_rounds = vec![];
    let mut active_port_ratios = vec![];
    let mut routings = vec![];
    let mut alterations = vec![];

    for reader in &readers {
        let switches = reader.read_switches();
        active_rounds.extend(switches.active_rounds);
        port_active_rounds.extend(switches.port_active_rounds);
        active_port_ratios.extend(switches.active_port_ratios);

        let objects = reader.read_objects();
        routings.extend(objects.routings);
        alterations.extend(objects.alterations);
    }

    for (kind, sample) in [
        (CdfKind::ActiveSwitches, &active_rounds),
        (CdfKind::ActivePorts, &port_active_rounds),
        (CdfKind::SwitchActivePorts, &active_port_ratios),
        (CdfKind::Routings, &routings),
        (CdfKind::Alterations, &alterations)
    ] {
        let filepath = format!("{}/cdf_{}.png", outdir, kind);

        match chart::render_cdf(kind, sample, &filepath) {
            Ok(_) => (),
            Err(_) => panic!("図の出力に失敗しました: {}", filepath),
        }
    }

    println!("Figures saved to {}", outdir);
}

/// 設定の各軸の直積から読込器を組み立てる
/// 掃引と同じ棄却規則を通し、存在しないグループは作らない
fn build_readers(config: &Config) -> Vec<DataReader> {
    let plot = &config.plot;

    let mut readers = vec![];

    for (project, dataset, switch_size, mirror, mu) in iproduct!(
        &plot.projects,
        &plot.datasets,
        &plot.switch_sizes,
        &plot.mirrored,
        &plot.mus
    ) {
        let mirror = match MirrorMode::from_str(mirror) {
            Ok(mode) => mode,
            Err(_) => panic!("Invalid `mirrored`: {}", mirror),
        };

        let switch_size = match sweep::resolve_switch_size(*switch_size, plot.num_nodes) {
            Some(size) => size,
            None => {
                debugger::log_skip(config, project, plot.num_nodes, *switch_size);
                continue;
            }
        };

        readers.push(DataReader {
            dataset: dataset.clone(),
            project: project.clone(),
            num_nodes: plot.num_nodes,
            switch_size,
            mirror,
            mu: *mu,
            num_simulations: plot.num_simulations,
            root: plot.data_root.clone(),
        });
    }

    readers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readers_cover_the_feasible_plot_axes() {
        let mut config = Config::test_default();
        config.plot.switch_sizes = vec![16, 256];

        let readers = build_readers(&config);

        // (16, mirrored), (16, generic)のみ、256は128ノードで棄却される
        assert_eq!(readers.len(), 2);
        assert!(readers.iter().all(|reader| reader.switch_size == 16));
        assert_eq!(readers[0].mirror, MirrorMode::Mirrored);
        assert_eq!(readers[1].mirror, MirrorMode::Generic);
    }
}
