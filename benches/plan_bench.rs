// ABOUTME: Criterion benchmarks for the nutrition plan calculator and onboarding flow
// ABOUTME: Measures single-plan latency, batch throughput and a full wizard walk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for plan calculation.

#![allow(clippy::missing_docs_in_private_items, missing_docs, clippy::unwrap_used)]

use calplan::config::{FormulaVersion, PlanConfig};
use calplan::intelligence::{BmiReading, NutritionPlanCalculator};
use calplan::models::{Gender, Goal, UserProfile, WorkoutFrequency};
use calplan::onboarding::{OnboardingEvent, OnboardingFlow, StepInput};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn generate_profiles(count: usize) -> Vec<UserProfile> {
    (0..count)
        .map(|index| UserProfile {
            height_cm: 150.0 + (index % 50) as f64,
            weight_kg: 50.0 + (index % 80) as f64,
            age: 18 + (index % 60) as u32,
            gender: Gender::ALL[index % 3],
            goal: Goal::ALL[(index / 3) % 3],
            workout_frequency: WorkoutFrequency::ALL[(index / 9) % 3],
        })
        .collect()
}

fn bench_single_plan(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_plan");
    let profile = generate_profiles(1).remove(0);

    for version in [FormulaVersion::Current, FormulaVersion::Legacy] {
        let calculator = NutritionPlanCalculator::new(PlanConfig::for_version(version));
        group.bench_with_input(
            BenchmarkId::from_parameter(version),
            &profile,
            |b, profile| {
                b.iter(|| calculator.compute(black_box(profile), black_box(today())));
            },
        );
    }
    group.finish();
}

fn bench_plan_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_plan_batch");
    let calculator = NutritionPlanCalculator::default();

    for size in [100_usize, 1_000, 10_000] {
        let profiles = generate_profiles(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &profiles, |b, profiles| {
            b.iter(|| {
                profiles
                    .iter()
                    .filter_map(|profile| calculator.compute(profile, today()).ok())
                    .map(|plan| plan.calories)
                    .sum::<i64>()
            });
        });
    }
    group.finish();
}

fn bench_onboarding_walk(c: &mut Criterion) {
    let events = [
        OnboardingEvent::GetStarted,
        OnboardingEvent::Submit {
            input: StepInput::Gender {
                gender: Gender::Female,
            },
        },
        OnboardingEvent::Submit {
            input: StepInput::WorkoutFrequency {
                frequency: WorkoutFrequency::Regular,
            },
        },
        OnboardingEvent::Submit {
            input: StepInput::HeightWeight {
                height_cm: 165.0,
                weight_kg: 60.0,
            },
        },
        OnboardingEvent::Submit {
            input: StepInput::Birthdate {
                date: NaiveDate::from_ymd_opt(1992, 3, 14).unwrap(),
            },
        },
        OnboardingEvent::Submit {
            input: StepInput::Goal { goal: Goal::Maintain },
        },
        OnboardingEvent::Continue,
        OnboardingEvent::Continue,
    ];
    let calculator = NutritionPlanCalculator::default();

    c.bench_function("onboarding_walk", |b| {
        b.iter(|| {
            let mut flow = OnboardingFlow::new();
            for event in events {
                flow.handle(event, today()).unwrap();
            }
            flow.plan(today(), &calculator).unwrap()
        });
    });
}

fn bench_bmi(c: &mut Criterion) {
    c.bench_function("bmi_reading", |b| {
        b.iter(|| BmiReading::new(black_box(172.0), black_box(68.5)));
    });
}

criterion_group!(
    benches,
    bench_single_plan,
    bench_plan_batch,
    bench_onboarding_walk,
    bench_bmi
);
criterion_main!(benches);
