use crate::scalar::abs;
use crate::{Mat4, MathError};

const N: usize = 4;

/// Gauss-Jordan elimination with full pivoting: solve `A·X = B` in place.
///
/// On success `a` holds `A⁻¹` and `b` holds `X = A⁻¹·B`. Each step picks the
/// largest remaining `|a(r, c)|` over every unused row and column, moves it to
/// the diagonal with a row swap, normalizes the pivot row, then clears the
/// pivot column from every other row. Column permutations introduced by the
/// pivot choice are undone on `a` at the end; `b` needs no unscrambling.
///
/// Fails with [`MathError::SingularPivot`] if a pivot is exactly zero. Both
/// matrices are partially reduced at that point.
pub fn gauss_jordan(a: &mut Mat4, b: &mut Mat4) -> Result<(), MathError> {
    let mut pivot_row = [0usize; N];
    let mut pivot_col = [0usize; N];
    let mut pivot_used = [false; N];

    for step in 0..N {
        let mut big = 0.0;
        let mut irow = 0;
        let mut icol = 0;
        for r in (0..N).filter(|&r| !pivot_used[r]) {
            for c in (0..N).filter(|&c| !pivot_used[c]) {
                let v = abs(a.get(r, c));
                if v >= big {
                    big = v;
                    irow = r;
                    icol = c;
                }
            }
        }
        pivot_used[icol] = true;

        // Put the pivot on the diagonal.
        if irow != icol {
            a.swap_rows(irow, icol);
            b.swap_rows(irow, icol);
        }
        pivot_row[step] = irow;
        pivot_col[step] = icol;

        let pivot = a.get(icol, icol);
        if pivot == 0.0 {
            tracing::debug!(step, column = icol, "gauss-jordan: zero pivot, matrix is singular");
            return Err(MathError::SingularPivot { step, column: icol });
        }
        let inv = 1.0 / pivot;
        // The diagonal slot accumulates A⁻¹ in place.
        a.set(icol, icol, 1.0);
        for c in 0..N {
            a.set(icol, c, a.get(icol, c) * inv);
            b.set(icol, c, b.get(icol, c) * inv);
        }

        for r in (0..N).filter(|&r| r != icol) {
            let factor = a.get(r, icol);
            a.set(r, icol, 0.0);
            for c in 0..N {
                a.set(r, c, a.get(r, c) - a.get(icol, c) * factor);
                b.set(r, c, b.get(r, c) - b.get(icol, c) * factor);
            }
        }
    }

    for step in (0..N).rev() {
        if pivot_row[step] != pivot_col[step] {
            a.swap_cols(pivot_row[step], pivot_col[step]);
        }
    }
    Ok(())
}
