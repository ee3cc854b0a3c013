use chrono::{ DateTime, Local };
use std::{ fs, io::Error, process, time::SystemTime };

/// ファイル名を指定し、ファイルをString形式で読み込む
/// Result型なので、この関数の外側でエラーハンドリングを行うこと
pub fn read_file(filepath: &str) -> Result<String, Error> {
    let file_contents = fs::read_to_string(filepath)?;
    Ok(file_contents)
}

/// タイムスタンプとプロセスIDを使用し、実行ごとのIDを生成する
/// 形式は、%Y%m%d-%H%M%S_PID
pub fn generate_id() -> String {
    let current_time = SystemTime::now();
    let timestamp: DateTime<Local> = current_time.into();
    let time_str = timestamp.format("%Y%m%d-%H%M%S").to_string();

    let pid = process::id();

    format!("{}_{:010}", time_str, pid)
}

/// スライスをn個の連続なチャンクに分割する (numpyのarray_splitと同じ配分)
/// 先頭の len % n 個のチャンクが1要素多くなる
pub fn chunk_evenly<T: Clone>(items: &[T], n: usize) -> Vec<Vec<T>> {
    assert!(n > 0, "chunk_evenly: n must be positive");

    let base = items.len() / n;
    let remainder = items.len() % n;

    let mut out = Vec::with_capacity(n);
    let mut head = 0;

    for idx in 0..n {
        let size = if idx < remainder { base + 1 } else { base };
        out.push(items[head..head + size].to_vec());
        head += size;
    }

    out
}

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// 母標準偏差 (numpyのstdに合わせ、Nで割る)
pub fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_evenly_reconstructs_original_order() {
        let items: Vec<usize> = (0..13).collect();
        let chunks = chunk_evenly(&items, 4);

        assert_eq!(chunks.len(), 4);
        // 13 = 4 + 3 + 3 + 3
        assert_eq!(chunks[0].len(), 4);
        assert_eq!(chunks[1].len(), 3);

        let rejoined: Vec<usize> = chunks.into_iter().flatten().collect();
        assert_eq!(rejoined, items);
    }

    #[test]
    fn chunk_evenly_with_more_chunks_than_items() {
        let items = vec![1, 2];
        let chunks = chunk_evenly(&items, 2);
        assert_eq!(chunks, vec![vec![1], vec![2]]);
    }

    #[test]
    fn mean_and_population_std() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert!((std_dev(&values) - 2.0).abs() < 1e-12);
    }
}
