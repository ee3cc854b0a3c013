/// シミュレーション成功判定に用いるマーカ文字列
/// sinalgo側のログにこの部分文字列が含まれていれば成功とみなす
pub const SUCCESS_MARKER: &str = "rotation";

/// 各シミュレーションの出力ログのファイル名
pub const SIM_LOG_NAME: &str = "sim.txt";

/// 集計対象となる1シミュレーションあたりの操作数ファイル
pub const OPERATIONS_FILE: &str = "operations.csv";

/// verifyモードで走査する、各シミュレーションのログのルート
pub const SIM_LOG_ROOT: &str = "logs/output/";

// For ProgressBar
pub const PB_TEMPLATES: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta_precise}) \t{msg}";
pub const PB_CHARS: &str = "#9876543210>-";

/// ECDFを評価するグリッドの点数 (np.linspaceのデフォルトに合わせる)
pub const CDF_GRID_POINTS: usize = 50;

/// 図の出力サイズ、8x4インチ・300dpi相当
pub const CHART_WIDTH: u32 = 2400;
pub const CHART_HEIGHT: u32 = 1200;
