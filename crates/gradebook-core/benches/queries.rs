use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::Gradebook;

fn make_gradebook(students: usize, grades_per_student: usize) -> Gradebook {
    let mut book = Gradebook::new();
    for i in 0..students {
        let id = book.add_student(format!("Given{i}"), format!("Family{i}"), "Patronymic");
        for j in 0..grades_per_student {
            let grade = ((i * 7 + j * 3) % 5 + 1) as i64;
            book.add_grade_to_student(id, grade).unwrap();
        }
    }
    book
}

fn bench_sort_by_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_average");

    let small = make_gradebook(100, 10);
    group.bench_function("100 students", |b| {
        b.iter(|| small.sort_by_average(black_box(true)))
    });

    let large = make_gradebook(10_000, 20);
    group.bench_function("10k students asc", |b| {
        b.iter(|| large.sort_by_average(black_box(true)))
    });
    group.bench_function("10k students desc", |b| {
        b.iter(|| large.sort_by_average(black_box(false)))
    });

    group.finish();
}

fn bench_students_below_average(c: &mut Criterion) {
    let book = make_gradebook(10_000, 20);

    c.bench_function("students_below_average 10k", |b| {
        b.iter(|| book.students_below_average(black_box(3.0)))
    });
}

fn bench_add_grade(c: &mut Criterion) {
    c.bench_function("add_grade_to_student", |b| {
        b.iter_batched(
            || make_gradebook(1_000, 0),
            |mut book| {
                for i in 1..=1_000u64 {
                    let _ = book.add_grade_to_student(gradebook_core::StudentId::new(i), 4);
                }
                book
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_sort_by_average,
    bench_students_below_average,
    bench_add_grade
);
criterion_main!(benches);
