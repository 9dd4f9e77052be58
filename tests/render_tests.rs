use market_charts::charts::{
    MarketChartGenerator, PainPointHeatmapGenerator, WorkforceChartGenerator,
};
use market_charts::config::{ChartSize, RenderConfig};
use market_charts::data::{MARKET_TABLE, PAIN_POINTS, WORKFORCE_SPLIT};
use market_charts::ChartError;
use plotters::style::RGBColor;

fn rgb(color: RGBColor) -> [u8; 3] {
    [color.0, color.1, color.2]
}

#[test]
fn market_bars_are_painted_in_hue_colours() {
    let size = RenderConfig::default().market;
    let image = MarketChartGenerator::render(size).unwrap();
    assert_eq!(image.dimensions(), (size.width, size.height));

    let layout = MarketChartGenerator::layout(&MARKET_TABLE, size);
    for bar in &layout.bars {
        let (x, _) = bar.rect.center();
        let pixel = image.get_pixel(x as u32, (bar.rect.bottom - 5) as u32);
        assert_eq!(pixel.0, rgb(bar.color), "bar {} {}", bar.country, bar.year_index);
    }
}

#[test]
fn donut_slices_and_hole() {
    let size = RenderConfig::default().workforce;
    let image = WorkforceChartGenerator::render(size).unwrap();
    let layout = WorkforceChartGenerator::layout(&WORKFORCE_SPLIT, size).unwrap();

    for slice in &layout.slices {
        let angle = slice.start_deg + slice.sweep_deg * 0.25;
        let (x, y) = slice.point_at(angle, layout.radius * 0.85);
        assert_eq!(image.get_pixel(x as u32, y as u32).0, rgb(slice.color), "{}", slice.name);
    }

    let (cx, cy) = (layout.center.0.round() as u32, layout.center.1.round() as u32);
    assert_eq!(image.get_pixel(cx, cy).0, [255, 255, 255]);
}

#[test]
fn heatmap_cells_use_scale_colours() {
    let size = RenderConfig::default().heatmap;
    let image = PainPointHeatmapGenerator::render(size).unwrap();
    let layout = PainPointHeatmapGenerator::layout(&PAIN_POINTS, size).unwrap();

    for cell in &layout.cells {
        let pixel = image.get_pixel((cell.rect.left + 3) as u32, (cell.rect.top + 3) as u32);
        assert_eq!(pixel.0, rgb(cell.color), "cell ({}, {})", cell.row, cell.col);
    }

    let bar = &layout.colorbar;
    for y in [bar.rect.top, bar.rect.center().1, bar.rect.bottom] {
        let pixel = image.get_pixel((bar.rect.left + 5) as u32, y as u32);
        assert_eq!(pixel.0, rgb(bar.color_at(y)));
    }
}

#[test]
fn rendering_twice_gives_identical_images() {
    let config = RenderConfig::default();
    assert_eq!(
        MarketChartGenerator::render(config.market).unwrap().as_raw(),
        MarketChartGenerator::render(config.market).unwrap().as_raw()
    );
    assert_eq!(
        WorkforceChartGenerator::render(config.workforce).unwrap().as_raw(),
        WorkforceChartGenerator::render(config.workforce).unwrap().as_raw()
    );
    assert_eq!(
        PainPointHeatmapGenerator::render(config.heatmap).unwrap().as_raw(),
        PainPointHeatmapGenerator::render(config.heatmap).unwrap().as_raw()
    );
}

#[test]
fn run_writes_three_pngs_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig {
        output_dir: dir.path().to_path_buf(),
        ..RenderConfig::default()
    };

    let written = market_charts::run(&config).unwrap();
    let names: Vec<String> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "market_growth_mena.png",
            "employment_stats.png",
            "pain_points_heatmap.png"
        ]
    );

    for path in &written {
        assert!(std::fs::metadata(path).unwrap().len() > 0);
        let decoded = image::open(path).unwrap();
        assert!(decoded.width() > 0 && decoded.height() > 0);
    }
    let decoded = image::open(&written[1]).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (800, 800));
}

#[test]
fn custom_sizes_are_honoured() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig {
        output_dir: dir.path().to_path_buf(),
        heatmap: ChartSize::new(640, 400),
        ..RenderConfig::default()
    };
    let written = market_charts::run(&config).unwrap();
    let heatmap = image::open(&written[2]).unwrap();
    assert_eq!((heatmap.width(), heatmap.height()), (640, 400));
}

#[test]
fn missing_output_directory_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig {
        output_dir: dir.path().join("docs"),
        ..RenderConfig::default()
    };

    let err = market_charts::run(&config).unwrap_err();
    match err {
        ChartError::Write { path, .. } => {
            assert!(path.ends_with("market_growth_mena.png"));
        }
        other => panic!("expected write error, got {other}"),
    }
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn missing_output_directory_created_on_request() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig {
        output_dir: dir.path().join("nested/docs"),
        create_output_dir: true,
        ..RenderConfig::default()
    };

    let written = market_charts::run(&config).unwrap();
    assert_eq!(written.len(), 3);
    assert!(written.iter().all(|p| p.exists()));
}

#[test]
fn uncreatable_output_directory_names_the_path() {
    let blocker = tempfile::NamedTempFile::new().unwrap();
    let target = blocker.path().join("docs");
    let config = RenderConfig {
        output_dir: target.clone(),
        create_output_dir: true,
        ..RenderConfig::default()
    };

    let err = market_charts::run(&config).unwrap_err();
    match &err {
        ChartError::CreateDir { path, .. } => assert_eq!(path, &target),
        other => panic!("expected create-dir error, got {other}"),
    }
    assert!(err.to_string().contains(&target.display().to_string()));
}

#[test]
fn every_chart_renders_at_its_minimum_size() {
    let dir = tempfile::tempdir().unwrap();
    let config = RenderConfig {
        output_dir: dir.path().to_path_buf(),
        market: MarketChartGenerator::MIN_SIZE,
        workforce: WorkforceChartGenerator::MIN_SIZE,
        heatmap: PainPointHeatmapGenerator::MIN_SIZE,
        ..RenderConfig::default()
    };
    config.validate().unwrap();

    let written = market_charts::run(&config).unwrap();
    let sizes = [config.market, config.workforce, config.heatmap];
    for (path, size) in written.iter().zip(sizes) {
        let decoded = image::open(path).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (size.width, size.height));
    }

    let heatmap = PainPointHeatmapGenerator::layout(&PAIN_POINTS, config.heatmap).unwrap();
    assert!(heatmap.grid.left < heatmap.grid.right);
    assert!(heatmap.colorbar.rect.left > heatmap.grid.right);
    let market = MarketChartGenerator::layout(&MARKET_TABLE, config.market);
    assert!(market.legend_frame.right <= market.plot.right);
    assert!(market.legend_frame.bottom <= market.plot.bottom);
}
