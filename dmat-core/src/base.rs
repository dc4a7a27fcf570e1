/// Shape queries shared by matrix types.
pub trait MatType {
    fn shape(&self) -> (usize, usize);
    fn rows(&self) -> usize { self.shape().0 }
    fn cols(&self) -> usize { self.shape().1 }

    fn is_square(&self) -> bool { 
        let (m, n) = self.shape();
        m == n
    }

    fn has_shape_of<M>(&self, other: &M) -> bool
    where M: MatType { 
        self.shape() == other.shape()
    }

    /// Whether `(i, j)` addresses an entry.
    fn contains(&self, index: (usize, usize)) -> bool { 
        let (m, n) = self.shape();
        index.0 < m && index.1 < n
    }
}
