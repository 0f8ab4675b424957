// Criterion benchmarks for Match Score

use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use match_score::core::calculate_match_score;
use match_score::models::CalculateScoreRequest;
use serde_json::json;

fn create_request_body(skill_count: usize) -> String {
    let skills: Vec<String> = (0..skill_count).map(|i| format!("skill-{}", i)).collect();

    json!({
        "job": {
            "description": "Backend engineer",
            "required_skills": skills,
            "required_education": "BS",
            "location": "Remote",
            "experience": 3,
            "salary_range": [80000, 120000]
        },
        "candidate": {
            "name": "A",
            "skills": skills,
            "education": "BS",
            "experience": 5,
            "desired_salary": 100000,
            "location": "Remote",
            "willing_to_relocate": true
        }
    })
    .to_string()
}

fn bench_decode_request(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_request");

    for skill_count in [1, 10, 100].iter() {
        let body = create_request_body(*skill_count);
        group.bench_with_input(BenchmarkId::from_parameter(skill_count), &body, |b, body| {
            b.iter(|| serde_json::from_str::<CalculateScoreRequest>(black_box(body)));
        });
    }

    group.finish();
}

fn bench_calculate_score(c: &mut Criterion) {
    let request: CalculateScoreRequest = match serde_json::from_str(&create_request_body(10)) {
        Ok(request) => request,
        Err(e) => panic!("bench request must decode: {}", e),
    };

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&request.job), black_box(&request.candidate)));
    });
}

criterion_group!(benches, bench_decode_request, bench_calculate_score);
criterion_main!(benches);
