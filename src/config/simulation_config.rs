use serde_derive::{ Deserialize, Serialize };

#[derive(Debug, Deserialize, Serialize, Clone)]
/// シミュレータ起動関連の設定
pub struct SimulationConfig {
    /// 実行モード (sweep, verify, plot)
    pub mode: String,
    /// javaの実行ファイル
    pub java_path: String,
    /// sinalgoのクラスパス
    pub classpath: String,
    /// エントリポイント
    pub program: String,
}
