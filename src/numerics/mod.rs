use crate::Float;

pub mod kde;

pub fn mean(data: &[Float]) -> Float {
    assert!(!data.is_empty());
    data.iter().sum::<Float>()/data.len() as Float
}

/// Sample standard deviation with `ddof` delta degrees of freedom.
pub fn std_dev(data: &[Float], ddof: usize) -> Float {
    assert!(data.len() > ddof);
    let m = mean(data);
    let sum_sq = data.iter().map(|x| (x-m).powi(2)).sum::<Float>();
    (sum_sq/(data.len()-ddof) as Float).sqrt()
}

pub fn linspace(start: Float, end: Float, count: usize) -> Vec<Float> {
    match count {
        0 => vec!(),
        1 => vec!(start),
        _ => {
            let step = (end-start)/(count-1) as Float;
            (0..count).map(|i| match i {
                i if i == count-1 => end,
                i => start + step*i as Float
            }).collect()
        }
    }
}

/// Widens [min,max] by `extra` of its length on either side. Degenerate ranges get a unit width.
pub fn extend_range(min: Float, max: Float, extra: Float) -> (Float,Float) {
    let range = max - min;
    if range < 1e-5 {
        return (min - 0.5, max + 0.5);
    }
    (min - extra*range, max + extra*range)
}
