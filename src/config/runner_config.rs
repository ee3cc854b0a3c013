use serde_derive::{ Deserialize, Serialize };

#[derive(Debug, Deserialize, Serialize, Clone)]
/// ワーカプール関連の設定
pub struct RunnerConfig {
    /// ワーカスレッド数 (コマンド数より多い場合は切り詰められる)
    pub num_threads: usize,
    /// 失敗ログの置き場所
    pub log_path: String,
    /// 失敗ログのファイル名
    pub log_file: String,
}
