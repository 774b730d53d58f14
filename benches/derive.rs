// benches/derive.rs
use criterion::{ criterion_group, criterion_main, Criterion, black_box };

use pcda_presenter::{
    config::options::{ CsvLayout, EngineConfig },
    csv,
    schools::{ filter_schools, SchoolDirectory },
    session::{ derive, form::ResidencyStatus, SessionForm },
};

fn sample_form(dir: &SchoolDirectory) -> SessionForm {
    let mut form = SessionForm::default();
    form.residency = ResidencyStatus::PermanentResident;
    form.credits_taken = 18;
    form.financial.down_payment = 4_000.0;
    form.financial.fafsa_reduction_estimate = 1_250.0;
    form.financial.reduction_per_semester = 600.0;
    form.schools = dir.all().iter().map(|s| s.id.as_str()).collect();
    form
}

fn bench_session(c: &mut Criterion) {
    let dir = SchoolDirectory::bundled().expect("bundled directory");
    let config = EngineConfig::default();
    let form = sample_form(&dir);

    c.bench_function("derive", |b| {
        b.iter(|| black_box(derive(black_box(&form), &config)))
    });

    c.bench_function("filter_schools", |b| {
        b.iter(|| black_box(filter_schools(&dir, black_box("university")).len()))
    });

    c.bench_function("summary_csv", |b| {
        b.iter(|| {
            let view = derive(&form, &config);
            let fields = csv::summary_fields(&form, &view, &dir);
            black_box(csv::to_csv_string(&fields, CsvLayout::Wide).map(|s| s.len()).unwrap_or(0))
        })
    });
}

criterion_group!(benches, bench_session);
criterion_main!(benches);
