use std::fs::{ self, File, OpenOptions };
use std::io::Write;
use std::path::{ Path, PathBuf };
use std::sync::Mutex;

use fxhash::FxHashSet;

use crate::{ parameters::SUCCESS_MARKER, utils };

/// 失敗ログの共有ハンドル
/// 全ワーカからのappendを1つのロックで直列化する
/// プロセス起動時に1度だけ開き、参照で各コンポーネントへ渡すこと
pub struct ResultLogger {
    inner: Mutex<LoggerInner>,
}

struct LoggerInner {
    file: File,
    /// 記録済みの行 (過去の実行の分を含む)
    seen: FxHashSet<String>,
}

impl ResultLogger {
    /// ログファイルを追記モードで開く
    /// 既存の行を読み込み、過去の実行で記録済みのエントリは二重追記しない
    pub fn open(log_path: &str, log_file: &str) -> ResultLogger {
        match fs::create_dir_all(log_path) {
            Ok(_) => (),
            Err(_) => panic!("ログディレクトリの作成に失敗しました (権限?)"),
        }

        let full_path: PathBuf = Path::new(log_path).join(log_file);

        let seen: FxHashSet<String> = match fs::read_to_string(&full_path) {
            Ok(contents) => contents.lines().map(|line| line.to_string()).collect(),
            Err(_) => FxHashSet::default(),
        };

        let file = match OpenOptions::new().create(true).append(true).open(&full_path) {
            Ok(file) => file,
            Err(_) => panic!("失敗ログを開けませんでした"),
        };

        ResultLogger {
            inner: Mutex::new(LoggerInner { file, seen }),
        }
    }

    /// 1行追記してフラッシュする
    /// 既に同じ行が記録されていれば何もしない
    pub fn append(&self, entry: &str) {
        let mut inner = self.inner.lock().unwrap();

        if !inner.seen.insert(entry.to_string()) {
            return;
        }

        writeln!(inner.file, "{}", entry).unwrap();
        inner.file.flush().unwrap();
    }
}

/// シミュレーションログに成功マーカが含まれるかを確認する
/// 部分文字列の一致だけを見る、というシミュレータ側との契約をそのまま保っている
/// (「no rotation occurred」でも真になるが、それがこの契約である)
pub fn check_sim(sim_log: &str) -> bool {
    match utils::read_file(sim_log) {
        Ok(contents) => contents.contains(SUCCESS_MARKER),
        Err(_) => false,
    }
}
