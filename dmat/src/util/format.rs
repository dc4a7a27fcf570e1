use std::fmt::Debug;
use itertools::Itertools;

/// Renders rows as nested brackets, e.g. `[[1.0, 2.0], [3.0, 4.0]]`.
/// Entries use their `Debug` form.
pub fn nested<I, R, D>(rows: I) -> String
where 
    I: IntoIterator<Item = R>,
    R: IntoIterator<Item = D>,
    D: Debug
{
    let inner = rows.into_iter().map(|row| 
        bracket(row.into_iter().map(|a| format!("{a:?}")))
    );
    bracket(inner)
}

fn bracket<I>(mut items: I) -> String
where I: Iterator<Item = String> { 
    format!("[{}]", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested() { 
        let s = nested([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(s, "[[1.0, 2.0], [3.0, 4.0]]");
    }

    #[test]
    fn test_nested_single() { 
        let s = nested([[0.5]]);
        assert_eq!(s, "[[0.5]]");
    }

    #[test]
    fn test_nested_rows_from_iter() { 
        let rows = (0..2).map(|i| (0..3).map(move |j| (i * 3 + j) as f64));
        assert_eq!(nested(rows), "[[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]");
    }

    #[test]
    fn test_nested_empty() { 
        let s = nested(Vec::<Vec<f64>>::new());
        assert_eq!(s, "[]");

        let s = nested([Vec::<f64>::new()]);
        assert_eq!(s, "[[]]");
    }
}
