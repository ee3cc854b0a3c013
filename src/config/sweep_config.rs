use serde_derive::{ Deserialize, Serialize };

#[derive(Debug, Deserialize, Serialize, Clone)]
/// パラメータ掃引の各軸の設定
pub struct SweepConfig {
    /// 対象プロジェクト
    pub projects: Vec<String>,
    /// ノード数
    pub num_nodes: Vec<usize>,
    /// スイッチサイズ (-1は2*ノード数に置換される)
    pub switch_sizes: Vec<i64>,
    /// 逐次実行フラグ
    pub sequential: Vec<bool>,
    /// ミラーリングモード (mirrored, generic)
    pub mirrored: Vec<String>,
    /// muの値
    pub mus: Vec<usize>,
    /// データセットのskew係数 (x)
    pub skew_x: Vec<String>,
    /// データセットのskew係数 (y)
    pub skew_y: Vec<String>,
    /// シミュレーションの繰り返し回数
    pub num_simulations: usize,
}
