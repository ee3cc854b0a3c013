use serde_derive::{ Deserialize, Serialize };

#[derive(Debug, Deserialize, Serialize, Clone)]
/// 図の出力関連の設定
pub struct PlotConfig {
    /// シミュレーション結果の読込元フォルダ
    pub data_root: String,
    /// 図の出力先フォルダ
    pub outdir: String,
    /// 実行ラベル (空ならタイムスタンプから生成)
    pub run_label: String,
    /// 集計対象プロジェクト
    pub projects: Vec<String>,
    /// 集計対象データセット
    pub datasets: Vec<String>,
    /// 集計対象スイッチサイズ
    pub switch_sizes: Vec<i64>,
    /// 集計対象ミラーリングモード
    pub mirrored: Vec<String>,
    /// 集計対象ノード数
    pub num_nodes: usize,
    /// 集計対象mu
    pub mus: Vec<usize>,
    /// 1グループあたりのシミュレーション数
    pub num_simulations: usize,
    /// Workの正規化係数 (1e4など)
    pub normalize: f64,
}
