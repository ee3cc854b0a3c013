use strum_macros::Display;

use crate::{ sweep::MirrorMode, utils };

use super::reader::{ DataReader, Operations };

/// Work合計の分解の仕方
/// routingと何を積み上げるかのバリアント
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum WorkComponent {
    LinkUpdates,
    SwitchUpdates,
    Rotations,
}

impl WorkComponent {
    /// 凡例に使う表示名
    pub fn legend(&self) -> &'static str {
        match self {
            WorkComponent::LinkUpdates => "Link Updates",
            WorkComponent::SwitchUpdates => "Switch Updates",
            WorkComponent::Rotations => "Rotations",
        }
    }
}

/// グループごとの集計結果、チャートへそのまま渡せる並行配列
#[derive(Debug, Clone, PartialEq)]
pub struct WorkBreakdown {
    pub labels: Vec<String>,
    /// routing側の平均 (正規化済み)
    pub base_means: Vec<f64>,
    /// 積み上げ側の平均 (正規化済み)
    pub top_means: Vec<f64>,
    /// 正規化後のWork合計の標準偏差
    pub work_stds: Vec<f64>,
}

impl WorkBreakdown {
    fn empty() -> WorkBreakdown {
        WorkBreakdown {
            labels: vec![],
            base_means: vec![],
            top_means: vec![],
            work_stds: vec![],
        }
    }

    /// 1グループ分を末尾に足す
    /// 標準偏差は正規化してから取る (std(work) / normalizeとは一致しない)
    fn push(&mut self, label: String, operations: &Operations, component: WorkComponent, normalize: f64) {
        let base = &operations.routings;
        let top = match component {
            WorkComponent::LinkUpdates => &operations.link_updates,
            WorkComponent::SwitchUpdates => &operations.switch_updates,
            WorkComponent::Rotations => &operations.rotations,
        };

        let work: Vec<f64> = base
            .iter()
            .zip(top.iter())
            .map(|(b, t)| (b + t) / normalize)
            .collect();

        self.labels.push(label);
        self.base_means.push(utils::mean(base) / normalize);
        self.top_means.push(utils::mean(top) / normalize);
        self.work_stds.push(utils::std_dev(&work));
    }
}

/// プロジェクト識別子を論文用の短い表示名へ写す
fn project_abbr(project: &str) -> &'static str {
    match project {
        "cbOptNet" => "CBN",
        "displayOpticNet" => "ODSN",
        "semiDisplayOpticNet" => "DSN",
        other => panic!("Invalid `project`: {}", other),
    }
}

/// グループの表示ラベル
/// ミラーリングモードが2種類のテンプレートを切り替える
pub fn project_label(reader: &DataReader) -> String {
    let abbr = project_abbr(&reader.project);

    match reader.mirror {
        MirrorMode::Mirrored => format!("OpticNet({})", abbr),
        MirrorMode::Generic => format!("OpticNet^AP({})", abbr),
    }
}

/// 各読込器からWork分解を集計する
/// 入力は変更しない、読込器1つがチャートの1本の棒になる
pub fn total_work(readers: &[DataReader], component: WorkComponent, normalize: f64) -> WorkBreakdown {
    let mut breakdown = WorkBreakdown::empty();

    for reader in readers {
        let operations = reader.read_operations();
        breakdown.push(project_label(reader), &operations, component, normalize);
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_operations() -> Operations {
        Operations {
            routings: vec![100.0, 200.0, 300.0],
            link_updates: vec![10.0, 20.0, 30.0],
            switch_updates: vec![1.0, 1.0, 1.0],
            rotations: vec![5.0, 10.0, 15.0],
        }
    }

    #[test]
    fn means_are_normalized_and_std_is_taken_after_division() {
        let mut breakdown = WorkBreakdown::empty();
        breakdown.push("OpticNet(CBN)".to_string(), &sample_operations(), WorkComponent::Rotations, 10.0);

        assert_eq!(breakdown.labels, vec!["OpticNet(CBN)"]);
        assert!((breakdown.base_means[0] - 20.0).abs() < 1e-12);
        assert!((breakdown.top_means[0] - 1.0).abs() < 1e-12);

        // work = [10.5, 21.0, 31.5], 母標準偏差 = sqrt(2/3) * 10.5
        let expected = (2.0f64 / 3.0).sqrt() * 10.5;
        assert!((breakdown.work_stds[0] - expected).abs() < 1e-9);
    }

    #[test]
    fn component_selects_the_stacked_column() {
        let mut breakdown = WorkBreakdown::empty();
        breakdown.push("a".to_string(), &sample_operations(), WorkComponent::LinkUpdates, 1.0);
        breakdown.push("b".to_string(), &sample_operations(), WorkComponent::SwitchUpdates, 1.0);

        assert!((breakdown.top_means[0] - 20.0).abs() < 1e-12);
        assert!((breakdown.top_means[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn labels_follow_the_abbreviation_table() {
        use crate::analysis::reader::DataReader;

        let mut reader = DataReader {
            dataset: "skewed-1-0.4".to_string(),
            project: "semiDisplayOpticNet".to_string(),
            num_nodes: 128,
            switch_size: 16,
            mirror: MirrorMode::Mirrored,
            mu: 4,
            num_simulations: 1,
            root: "output".to_string(),
        };

        assert_eq!(project_label(&reader), "OpticNet(DSN)");

        reader.mirror = MirrorMode::Generic;
        reader.project = "displayOpticNet".to_string();
        assert_eq!(project_label(&reader), "OpticNet^AP(ODSN)");
    }
}
