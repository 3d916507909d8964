use super::student::Student;

/// One tree node: a record plus its two optional children. A node owns its
/// subtrees exclusively, so dropping it frees every record below it.
#[derive(Debug)]
struct Node {
    student: Student,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn new(student: Student) -> Self {
        Node {
            student,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree over students, ordered by `student_id`.
///
/// Strictly smaller ids descend left, everything else descends right, so a
/// duplicate id would land in the right subtree instead of being rejected
/// here. The registry checks for duplicates before inserting; the tree
/// itself stays permissive.
#[derive(Debug)]
pub struct StudentTree {
    root: Option<Box<Node>>,
    len: usize,
}

impl StudentTree {
    pub fn new() -> Self {
        StudentTree { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Insert a record as a new leaf, keeping the ordering invariant.
    pub fn insert(&mut self, student: Student) {
        match self.root {
            None => self.root = Some(Box::new(Node::new(student))),
            Some(ref mut root) => insert_below(root, student),
        }
        self.len += 1;
    }

    /// Standard descent by id.
    pub fn search(&self, student_id: u32) -> Option<&Student> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            if student_id == node.student.student_id {
                return Some(&node.student);
            }
            current = if student_id < node.student.student_id {
                node.left.as_deref()
            } else {
                node.right.as_deref()
            };
        }
        None
    }

    /// Like `search`, but yields the record for in-place mutation.
    pub fn search_mut(&mut self, student_id: u32) -> Option<&mut Student> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            if student_id == node.student.student_id {
                return Some(&mut node.student);
            }
            current = if student_id < node.student.student_id {
                node.left.as_deref_mut()
            } else {
                node.right.as_deref_mut()
            };
        }
        None
    }

    /// Remove the record with `student_id` and return it, or `None` when
    /// the id is not in this tree.
    pub fn delete(&mut self, student_id: u32) -> Option<Student> {
        let (root, removed) = delete_below(self.root.take(), student_id);
        self.root = root;
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Ascending-id walk: left subtree, node, right subtree.
    pub fn collect_in_order<'tree>(&'tree self, out: &mut Vec<&'tree Student>) {
        collect_below(self.root.as_deref(), out);
    }

    pub fn in_order(&self) -> Vec<&Student> {
        let mut records = Vec::with_capacity(self.len);
        self.collect_in_order(&mut records);
        records
    }
}

fn insert_below(node: &mut Node, student: Student) {
    if student.student_id < node.student.student_id {
        match node.left {
            None => node.left = Some(Box::new(Node::new(student))),
            Some(ref mut left) => insert_below(left, student),
        }
    } else {
        match node.right {
            None => node.right = Some(Box::new(Node::new(student))),
            Some(ref mut right) => insert_below(right, student),
        }
    }
}

/// Recursive removal that threads ownership of each subtree back to its
/// parent, so splicing a node out is a matter of returning its replacement.
fn delete_below(
    node: Option<Box<Node>>,
    student_id: u32,
) -> (Option<Box<Node>>, Option<Student>) {
    let mut node = match node {
        Some(node) => node,
        None => return (None, None),
    };
    if student_id < node.student.student_id {
        let (left, removed) = delete_below(node.left.take(), student_id);
        node.left = left;
        (Some(node), removed)
    } else if student_id > node.student.student_id {
        let (right, removed) = delete_below(node.right.take(), student_id);
        node.right = right;
        (Some(node), removed)
    } else {
        match (node.left.take(), node.right.take()) {
            // at most one child: that child (possibly none) takes the
            // node's place
            (None, child) | (child, None) => (child, Some(node.student)),
            (left, Some(right)) => {
                // two children: the in-order successor is the minimum of
                // the right subtree; its value moves up here and its old
                // node is removed from the right subtree, which is a
                // one-child removal by construction
                let successor = min_record(&right).clone();
                let (right, _) = delete_below(Some(right), successor.student_id);
                let removed = std::mem::replace(&mut node.student, successor);
                node.left = left;
                node.right = right;
                (Some(node), Some(removed))
            }
        }
    }
}

fn min_record(node: &Node) -> &Student {
    match node.left {
        Some(ref left) => min_record(left),
        None => &node.student,
    }
}

fn collect_below<'tree>(node: Option<&'tree Node>, out: &mut Vec<&'tree Student>) {
    if let Some(node) = node {
        collect_below(node.left.as_deref(), out);
        out.push(&node.student);
        collect_below(node.right.as_deref(), out);
    }
}
