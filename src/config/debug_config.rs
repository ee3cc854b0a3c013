use serde_derive::{ Deserialize, Serialize };

#[derive(Debug, Deserialize, Serialize, Clone)]
/// デバッガ関連の設定
pub struct DebugConfig {
    /// 実行前に各コマンドを出力するか
    pub log_command: bool,
    /// 失敗したシミュレーションを出力するか
    pub log_failure: bool,
    /// 掃引で棄却された組合せを出力するか
    pub log_skip: bool,
    /// verifyモードの走査結果を出力するか
    pub log_verify: bool,
}
