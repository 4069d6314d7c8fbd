//! Environment variable validation with typo hints
//!
//! Invalid values never abort a run. The caller falls back to a default
//! and surfaces the returned warning.

/// Validator for one environment variable's values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, or describe why it was rejected
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Result<T, String>
    where
        F: Fn(&str) -> Option<T>,
    {
        parser(value).ok_or_else(|| {
            format!(
                "Invalid {} value '{}'.{} Valid values: {}",
                self.var_name,
                value,
                self.suggest(value),
                self.valid_values.join(", ")
            )
        })
    }

    fn suggest(&self, value: &str) -> String {
        let input = value.to_lowercase();
        let best = self
            .valid_values
            .iter()
            .map(|&valid| (valid, levenshtein(&input, valid)))
            .min_by_key(|&(_, dist)| dist);

        // A case-only difference has distance 0 and still gets a hint.
        match best {
            Some((suggested, dist)) if dist <= 2 && suggested != value => {
                format!(" Did you mean '{}'?", suggested)
            }
            _ => String::new(),
        }
    }
}

/// Levenshtein distance over bytes
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();
    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev_row: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b_bytes.len() + 1];

    for (i, a_char) in a_bytes.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b_bytes.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_bytes.len()]
}
