// SPDX-License-Identifier: MIT OR Apache-2.0

#![no_main]

use libfuzzer_sys::fuzz_target;
use movers_core::SeriesView;
use movers_narrate::VariableSummarizer;
use movers_score::surprisingness_with_diagnostics;

const MAX_VALUES: usize = 256;

fn decode_values(data: &[u8]) -> Vec<f64> {
    data.chunks_exact(8)
        .take(MAX_VALUES)
        .map(|chunk| {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            f64::from_le_bytes(bytes)
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    let Some((&control, payload)) = data.split_first() else {
        return;
    };

    let values = decode_values(payload);
    let time_window = f64::from(control) / 16.0;

    let d = 1 + usize::from(control % 3);
    if !values.is_empty() && values.len() % d == 0 {
        if let Ok(view) = SeriesView::from_f64(&values, values.len() / d, d) {
            let _ = surprisingness_with_diagnostics(&view, time_window);
        }
    }

    let summarizer = VariableSummarizer::new("fuzz", values);
    let _ = summarizer.short_qualitative_summary();
    let _ = summarizer.long_qualitative_summary();
    let _ = summarizer.short_quantitative_summary();
    let _ = summarizer.long_quantitative_summary();
    let _ = summarizer.prior_run_length();
});
