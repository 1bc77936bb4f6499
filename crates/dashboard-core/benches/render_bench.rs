use dashboard_core::{bar_chart, bar_chart_svg, line_chart, render_page, ChartLayout, CityId, DashboardState, Dataset, Language, Palette};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn bench_render(c: &mut Criterion) {
    let dataset = Dataset::coffee();
    let layout = ChartLayout::default();
    let palette = Palette::default();

    let mut group = c.benchmark_group("render_markup");
    group.bench_function("bar_model", |b| {
        b.iter(|| black_box(bar_chart(&dataset, Language::En, &layout)));
    });
    group.bench_function("line_model", |b| {
        b.iter(|| black_box(line_chart(&dataset, Language::Fr, CityId::CityB, &layout)));
    });
    group.bench_function("bar_svg", |b| {
        let model = bar_chart(&dataset, Language::En, &layout);
        b.iter(|| black_box(bar_chart_svg(&model, &palette)));
    });
    for lang in Language::ALL {
        group.bench_function(format!("page_{lang}"), |b| {
            let state = DashboardState::new(lang, CityId::CityA);
            b.iter(|| black_box(render_page(&dataset, &state)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
