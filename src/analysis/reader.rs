use crate::{ parameters::OPERATIONS_FILE, sweep::MirrorMode, utils };

/// 1グループ (データセット x プロジェクト x スイッチサイズ x モード x mu) 分の
/// シミュレーション結果の読込器
/// ランナが書き出すのと同じディレクトリ配置から読み、読込後のデータは不変
///
/// 結果ファイルの外部契約 (シミュレータ側が書き出すもの):
/// - operations.csv: 1行が1ラウンド、カンマ区切りの4列
///   (routings, link updates, switch updates, rotations)
/// - switches.csv: 1行が1スイッチ、カンマ区切りの3列
///   (アクティブだったラウンド数, ポートがアクティブだったラウンド数, アクティブポート率)
/// - objects.csv: 1行が1オブジェクト、カンマ区切りの2列
///   (routings, alterations)
#[derive(Debug, Clone)]
pub struct DataReader {
    /// "skewed-1-0.4"のような出力ディレクトリのセグメント
    pub dataset: String,
    pub project: String,
    pub num_nodes: usize,
    pub switch_size: usize,
    pub mirror: MirrorMode,
    pub mu: usize,
    pub num_simulations: usize,
    /// 出力ディレクトリのルート (通常は"output")
    pub root: String,
}

/// シミュレーションごとの操作数の合計
/// 添字はsim_id - 1
#[derive(Debug, Clone, PartialEq)]
pub struct Operations {
    pub routings: Vec<f64>,
    pub link_updates: Vec<f64>,
    pub switch_updates: Vec<f64>,
    pub rotations: Vec<f64>,
}

/// スイッチごとの稼働統計、全シミュレーションを連結したもの
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStats {
    pub active_rounds: Vec<f64>,
    pub port_active_rounds: Vec<f64>,
    pub active_port_ratios: Vec<f64>,
}

/// オブジェクトごとの操作数、全シミュレーションを連結したもの
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectStats {
    pub routings: Vec<f64>,
    pub alterations: Vec<f64>,
}

impl DataReader {
    /// sim_idに対応するシミュレーションの出力ディレクトリ
    fn sim_dir(&self, sim_id: usize) -> String {
        format!(
            "{}/{}/{}_{}/{}/{}/{}/{}/",
            self.root,
            self.dataset,
            self.project,
            self.num_nodes,
            self.switch_size,
            self.mirror,
            self.mu,
            sim_id
        )
    }

    /// シミュレーションごとの操作数合計を4本の配列として返す
    pub fn read_operations(&self) -> Operations {
        let mut operations = Operations {
            routings: vec![],
            link_updates: vec![],
            switch_updates: vec![],
            rotations: vec![],
        };

        for sim_id in 1..=self.num_simulations {
            let rows = read_rows(&format!("{}{}", self.sim_dir(sim_id), OPERATIONS_FILE), 4);

            // ラウンドごとの行を列ごとに合計する
            operations.routings.push(rows.iter().map(|row| row[0]).sum());
            operations.link_updates.push(rows.iter().map(|row| row[1]).sum());
            operations.switch_updates.push(rows.iter().map(|row| row[2]).sum());
            operations.rotations.push(rows.iter().map(|row| row[3]).sum());
        }

        operations
    }

    /// 全シミュレーションのスイッチ統計を連結して返す
    pub fn read_switches(&self) -> SwitchStats {
        let mut stats = SwitchStats {
            active_rounds: vec![],
            port_active_rounds: vec![],
            active_port_ratios: vec![],
        };

        for sim_id in 1..=self.num_simulations {
            for row in read_rows(&format!("{}switches.csv", self.sim_dir(sim_id)), 3) {
                stats.active_rounds.push(row[0]);
                stats.port_active_rounds.push(row[1]);
                stats.active_port_ratios.push(row[2]);
            }
        }

        stats
    }

    /// 全シミュレーションのオブジェクト統計を連結して返す
    pub fn read_objects(&self) -> ObjectStats {
        let mut stats = ObjectStats {
            routings: vec![],
            alterations: vec![],
        };

        for sim_id in 1..=self.num_simulations {
            for row in read_rows(&format!("{}objects.csv", self.sim_dir(sim_id)), 2) {
                stats.routings.push(row[0]);
                stats.alterations.push(row[1]);
            }
        }

        stats
    }
}

/// カンマ区切りの数値ファイルを読み込む
/// 列数が合わない行や数値でない値は契約違反としてここで落とす
fn read_rows(filepath: &str, num_columns: usize) -> Vec<Vec<f64>> {
    let contents = match utils::read_file(filepath) {
        Ok(contents) => contents,
        Err(_) => panic!("結果ファイルの読込に失敗しました: {}", filepath),
    };

    let mut rows = vec![];

    for line in contents.trim().lines() {
        let row: Vec<f64> = line
            .trim()
            .split(',')
            .map(|value| {
                match value.trim().parse::<f64>() {
                    Ok(v) => v,
                    Err(_) => panic!("数値のパースに失敗しました: {} ({})", value, filepath),
                }
            })
            .collect();

        if row.len() != num_columns {
            panic!("列数が契約と一致しません: {} ({})", row.len(), filepath);
        }

        rows.push(row);
    }

    rows
}
