use std::error::Error;

use plotters::prelude::*;
use strum_macros::Display;

use crate::parameters::{ CDF_GRID_POINTS, CHART_HEIGHT, CHART_WIDTH };

use super::aggregate::{ WorkBreakdown, WorkComponent };

const SILVER: RGBColor = RGBColor(192, 192, 192);
const GREY: RGBColor = RGBColor(128, 128, 128);

/// ECDFを描く対象の量
/// パディングはチャートごとの見た目のための定数で、アルゴリズム上の意味はない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CdfKind {
    ActiveSwitches,
    ActivePorts,
    SwitchActivePorts,
    Routings,
    Alterations,
}

impl CdfKind {
    pub fn title(&self) -> &'static str {
        match self {
            CdfKind::ActiveSwitches => "CDF of switches active for more than (x) rounds",
            CdfKind::ActivePorts => "CDF of rounds with active ports",
            CdfKind::SwitchActivePorts => "CDF of active port ratio per switch",
            CdfKind::Routings => "CDF of routings per object",
            CdfKind::Alterations => "CDF of alterations per object",
        }
    }

    pub fn x_desc(&self) -> &'static str {
        match self {
            CdfKind::ActiveSwitches => "Rounds x 10^4",
            CdfKind::ActivePorts => "Rounds",
            CdfKind::SwitchActivePorts => "Active port ratio",
            CdfKind::Routings => "Routings x 10^3",
            CdfKind::Alterations => "Alterations",
        }
    }

    /// ECDFを評価するグリッドの範囲
    /// 標本のmin/maxを量ごとのパディングで広げる、下限は元のスクリプトに
    /// 合わせて0でクランプする
    pub fn grid_bounds(&self, sample: &[f64]) -> (f64, f64) {
        let min = sample.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = sample.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        match self {
            CdfKind::ActiveSwitches => ((min - 0.1).max(0.0), max),
            CdfKind::ActivePorts => (0.0, max + 100.0),
            CdfKind::SwitchActivePorts => ((min - 0.1).max(0.0), max + 0.1),
            CdfKind::Routings => ((min - 10.0).max(0.0), max + 10.0),
            CdfKind::Alterations => ((min - 2.0).max(0.0), max + 2.0),
        }
    }
}

/// 経験分布関数
/// x以下の標本の割合を返す
pub fn ecdf(sample: &[f64], x: f64) -> f64 {
    if sample.is_empty() {
        return 0.0;
    }

    let count = sample.iter().filter(|&&value| value <= x).count();
    count as f64 / sample.len() as f64
}

/// 両端を含むn点の等間隔グリッド
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    if n == 1 {
        return vec![start];
    }

    (0..n).map(|i| start + ((end - start) * (i as f64)) / ((n - 1) as f64)).collect()
}

/// グリッド上で評価したECDFをステップ状の頂点列へ変換する
pub fn step_points(points: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(points.len() * 2);

    let mut prev_y = points[0].1;
    out.push(points[0]);

    for &(x, y) in &points[1..] {
        out.push((x, prev_y));
        out.push((x, y));
        prev_y = y;
    }

    out
}

/// Work分解の積み上げ棒グラフをPNGへ描画する
/// 下段がrouting、上段が選択した成分、エラーバーはWork合計の標準偏差
pub fn render_work_breakdown(
    breakdown: &WorkBreakdown,
    component: WorkComponent,
    filepath: &str
) -> Result<(), Box<dyn Error>> {
    let n = breakdown.labels.len();
    if n == 0 {
        return Ok(());
    }

    let y_max = (0..n)
        .map(|i| breakdown.base_means[i] + breakdown.top_means[i] + breakdown.work_stds[i])
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1e-9) * 1.1;

    let root = BitMapBackend::new(filepath, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Total Work ({})", component.legend()), ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0f64..n as f64, 0f64..y_max)?;

    let labels = breakdown.labels.clone();
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&|x| {
            labels.get(x.floor() as usize).cloned().unwrap_or_default()
        })
        .x_desc("Project")
        .y_desc("Work * 10^4")
        .draw()?;

    chart
        .draw_series(
            (0..n).map(|i| {
                Rectangle::new(
                    [(i as f64 + 0.15, 0.0), (i as f64 + 0.85, breakdown.base_means[i])],
                    SILVER.filled()
                )
            })
        )?
        .label("Service Cost")
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], SILVER.filled()));

    chart
        .draw_series(
            (0..n).map(|i| {
                let base = breakdown.base_means[i];
                Rectangle::new(
                    [(i as f64 + 0.15, base), (i as f64 + 0.85, base + breakdown.top_means[i])],
                    GREY.filled()
                )
            })
        )?
        .label(component.legend())
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], GREY.filled()));

    // エラーバー、中央の縦線と上下のキャップ
    chart.draw_series(
        (0..n).flat_map(|i| {
            let center = i as f64 + 0.5;
            let cap = 0.08;
            let total = breakdown.base_means[i] + breakdown.top_means[i];
            let lower = (total - breakdown.work_stds[i]).max(0.0);
            let upper = total + breakdown.work_stds[i];

            vec![
                PathElement::new(vec![(center, lower), (center, upper)], BLACK.stroke_width(2)),
                PathElement::new(vec![(center - cap, upper), (center + cap, upper)], BLACK.stroke_width(2)),
                PathElement::new(vec![(center - cap, lower), (center + cap, lower)], BLACK.stroke_width(2))
            ]
        })
    )?;

    chart.configure_series_labels().border_style(&BLACK).background_style(&WHITE).draw()?;

    root.present()?;

    Ok(())
}

/// 標本のECDFをステップ線としてPNGへ描画する
pub fn render_cdf(kind: CdfKind, sample: &[f64], filepath: &str) -> Result<(), Box<dyn Error>> {
    if sample.is_empty() {
        return Ok(());
    }

    let (lower, mut upper) = kind.grid_bounds(sample);
    if upper <= lower {
        upper = lower + 1.0;
    }

    let grid = linspace(lower, upper, CDF_GRID_POINTS);
    let points: Vec<(f64, f64)> = grid.iter().map(|&x| (x, ecdf(sample, x))).collect();

    let root = BitMapBackend::new(filepath, (CHART_WIDTH, CHART_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(kind.title(), ("sans-serif", 40))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(lower..upper, 0f64..1.05f64)?;

    chart.configure_mesh().x_desc(kind.x_desc()).y_desc("Fraction of samples").draw()?;

    chart.draw_series(LineSeries::new(step_points(&points), BLUE.stroke_width(2)))?;

    root.present()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecdf_is_a_right_continuous_step() {
        let sample = [1.0, 2.0, 2.0, 4.0];

        assert_eq!(ecdf(&sample, 0.5), 0.0);
        assert_eq!(ecdf(&sample, 1.0), 0.25);
        assert_eq!(ecdf(&sample, 2.0), 0.75);
        assert_eq!(ecdf(&sample, 3.9), 0.75);
        assert_eq!(ecdf(&sample, 4.0), 1.0);
        assert_eq!(ecdf(&sample, 100.0), 1.0);
    }

    #[test]
    fn linspace_includes_both_endpoints() {
        let grid = linspace(0.0, 1.0, 5);
        assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(linspace(3.0, 3.0, 1), vec![3.0]);
    }

    #[test]
    fn grid_bounds_apply_the_per_kind_pads() {
        let sample = [5.0, 50.0];

        assert_eq!(CdfKind::ActiveSwitches.grid_bounds(&sample), (4.9, 50.0));
        assert_eq!(CdfKind::ActivePorts.grid_bounds(&sample), (0.0, 150.0));
        assert_eq!(CdfKind::SwitchActivePorts.grid_bounds(&sample), (4.9, 50.1));
        assert_eq!(CdfKind::Routings.grid_bounds(&sample), (0.0, 60.0));
        assert_eq!(CdfKind::Alterations.grid_bounds(&sample), (3.0, 52.0));
    }

    #[test]
    fn step_points_hold_previous_value_until_each_grid_point() {
        let points = vec![(0.0, 0.0), (1.0, 0.5), (2.0, 1.0)];
        let step = step_points(&points);

        assert_eq!(
            step,
            vec![(0.0, 0.0), (1.0, 0.0), (1.0, 0.5), (2.0, 0.5), (2.0, 1.0)]
        );
    }
}
