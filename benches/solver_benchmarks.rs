use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use interlock::examples::grids::{open_square, plus};
use interlock::puzzle::Puzzle;
use interlock::solver::{
    engine::SolverEngine,
    heuristics::{
        slot::{MinimumRemainingValuesHeuristic, SelectFirstHeuristic},
        value::{IdentityValueHeuristic, LeastConstrainingValueHeuristic},
    },
};

fn engines() -> Vec<(&'static str, SolverEngine)> {
    vec![
        (
            "mrv_lcv",
            SolverEngine::new(
                Box::new(MinimumRemainingValuesHeuristic),
                Box::new(LeastConstrainingValueHeuristic),
            ),
        ),
        (
            "first_identity",
            SolverEngine::new(
                Box::new(SelectFirstHeuristic),
                Box::new(IdentityValueHeuristic),
            ),
        ),
    ]
}

fn inventory() -> Vec<String> {
    [
        "bit", "are", "toe", "bat", "iro", "tee", "cat", "ant", "car", "arc", "tin", "ten", "net",
        "tan", "rat", "tar", "art", "ear", "era", "eat", "ate", "tea", "oar", "rob", "orb", "bar",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

fn bench_fill(c: &mut Criterion) {
    let puzzles: Vec<(&str, Puzzle)> = vec![("plus", plus()), ("open_square_3", open_square(3))];
    let words = inventory();

    let mut group = c.benchmark_group("fill");
    for (grid_name, puzzle) in &puzzles {
        for (engine_name, engine) in engines() {
            group.bench_with_input(
                BenchmarkId::new(*grid_name, engine_name),
                puzzle,
                |b, puzzle| {
                    b.iter(|| {
                        let (solution, _stats) =
                            engine.solve(black_box(puzzle), words.clone()).unwrap();
                        black_box(solution)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_fill);
criterion_main!(benches);
