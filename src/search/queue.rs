/// An array-backed binary heap ordered by a caller-supplied comparison
/// closure. The closure answers "does the first element outrank the second?",
/// so the same type works as a min-heap or max-heap depending on how it is
/// built.
///
/// `std::collections::BinaryHeap` wants `Ord` on the element type, which is
/// awkward for float-scored search nodes; a closure-ordered heap sidesteps
/// that and also makes in-place priority changes possible.
pub struct PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    elements: Vec<T>,
    outranks: F,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(outranks: F) -> Self {
        Self {
            elements: Vec::new(),
            outranks,
        }
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// The highest-priority element, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    pub fn enqueue(&mut self, element: T) {
        self.elements.push(element);
        self.sift_up(self.elements.len() - 1);
    }

    /// Removes and returns the highest-priority element.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let element = self.elements.swap_remove(0);
        if !self.elements.is_empty() {
            self.sift_down(0);
        }
        Some(element)
    }

    /// Replaces the element at `index` and restores heap order. The new
    /// element may rank higher or lower than the old one.
    pub fn change_priority(&mut self, index: usize, element: T) {
        self.elements[index] = element;
        let index = self.sift_up(index);
        self.sift_down(index);
    }

    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let parent = (index - 1) / 2;
            if (self.outranks)(&self.elements[index], &self.elements[parent]) {
                self.elements.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
        index
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut highest = index;
            if left < self.elements.len()
                && (self.outranks)(&self.elements[left], &self.elements[highest])
            {
                highest = left;
            }
            if right < self.elements.len()
                && (self.outranks)(&self.elements[right], &self.elements[highest])
            {
                highest = right;
            }
            if highest == index {
                break;
            }
            self.elements.swap(index, highest);
            index = highest;
        }
    }
}

impl<T, F> PriorityQueue<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    /// Position of the first element equal to `element`, if present. Linear
    /// scan; intended for the occasional priority update, not hot loops.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        self.elements.iter().position(|e| e == element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_heap_order() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a < b);
        for value in [5, 1, 4, 2, 3] {
            queue.enqueue(value);
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(queue.peek(), Some(&1));

        let mut drained = Vec::new();
        while let Some(value) = queue.dequeue() {
            drained.push(value);
        }
        assert_eq!(drained, vec![1, 2, 3, 4, 5]);
        assert!(queue.is_empty());
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn test_max_heap_order() {
        let mut queue = PriorityQueue::new(|a: &i32, b: &i32| a > b);
        for value in [2, 9, 4] {
            queue.enqueue(value);
        }
        assert_eq!(queue.dequeue(), Some(9));
        assert_eq!(queue.dequeue(), Some(4));
        assert_eq!(queue.dequeue(), Some(2));
    }

    #[test]
    fn test_change_priority() {
        let mut queue =
            PriorityQueue::new(|a: &(f64, &str), b: &(f64, &str)| a.0 < b.0);
        queue.enqueue((3.0, "c"));
        queue.enqueue((1.0, "a"));
        queue.enqueue((2.0, "b"));

        // Promote "c" to the front
        let index = queue.index_of(&(3.0, "c")).unwrap();
        queue.change_priority(index, (0.5, "c"));
        assert_eq!(queue.dequeue(), Some((0.5, "c")));

        // Demote "a" behind "b"
        let index = queue.index_of(&(1.0, "a")).unwrap();
        queue.change_priority(index, (9.0, "a"));
        assert_eq!(queue.dequeue(), Some((2.0, "b")));
        assert_eq!(queue.dequeue(), Some((9.0, "a")));
    }
}
