//! Typed, positioned constructs derived from the token stream.
//!
//! A `Construct` is the unit the alignment and wrap facets reason about:
//! a field, parameter, local variable, assignment, case-group statement,
//! method declaration, or method invocation, each carrying the positions of
//! its anchor-relevant tokens and the id of the scope that owns it. Construct
//! lifetimes end with the single check invocation that discovered them.

use serde::{Deserialize, Serialize};

use crate::token::Pos;

/// Identifies an enclosing container: a type body, a method or block body, a
/// switch body, a single case group, or a single parameter list. Two
/// constructs may only share an alignment group when their scope ids match.
pub type ScopeId = u32;

/// A positioned token excerpt: where it is and the text quoted in messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PosTok {
    pub pos: Pos,
    pub text: String,
}

impl PosTok {
    pub fn new(pos: Pos, text: impl Into<String>) -> Self {
        Self {
            pos,
            text: text.into(),
        }
    }
}

/// A field declaration inside a type body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDecl {
    pub scope: ScopeId,
    pub name: PosTok,
    /// The `=` of the initializer, absent for bare declarations. A field
    /// without one is excluded from the field-initializer category but still
    /// participates in field-name groups.
    pub init_eq: Option<PosTok>,
    pub start_line: u32,
    pub end_line: u32,
}

/// A single parameter of a method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamDecl {
    /// Scope of the parameter list itself; parameters of different methods
    /// never share a group.
    pub list: ScopeId,
    /// First token of the parameter (its type), quoted by wrap messages.
    pub first: PosTok,
    pub name: PosTok,
}

/// A local variable declaration inside a method or block body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalVarDecl {
    pub scope: ScopeId,
    pub name: PosTok,
    pub init_eq: Option<PosTok>,
    pub start_line: u32,
    pub end_line: u32,
}

/// An assignment statement (`=` or a compound assignment operator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentStmt {
    pub scope: ScopeId,
    pub eq: PosTok,
    pub start_line: u32,
    pub end_line: u32,
}

/// The first statement following a run of `case`/`default` labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseGroupStmt {
    /// Scope of the enclosing switch body; case groups of different switches
    /// never share a group.
    pub switch: ScopeId,
    pub first_stmt: PosTok,
    pub start_line: u32,
    pub end_line: u32,
}

/// A method (or constructor) declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodDecl {
    pub scope: ScopeId,
    /// Position of the declaration's very first token, modifiers included;
    /// this column is the wrap rule's expected column for a wrapped name.
    pub decl_first: Pos,
    /// First token of the return type; `None` for constructors.
    pub return_type: Option<PosTok>,
    /// Line of the last return-type token; a name on a later line is wrapped.
    pub return_type_end_line: u32,
    pub name: PosTok,
    pub params: Vec<ParamDecl>,
    pub lparen: Pos,
    pub rparen: Pos,
    /// Opening brace of the body; absent for abstract declarations.
    pub body_open: Option<PosTok>,
    pub start_line: u32,
    pub end_line: u32,
}

/// A method invocation's argument list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodInvocation {
    pub scope: ScopeId,
    pub lparen: Pos,
    pub rparen: Pos,
    /// First token of each argument, in order.
    pub args: Vec<PosTok>,
}

/// Anything the extraction pass can discover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Construct {
    Field(FieldDecl),
    Param(ParamDecl),
    LocalVar(LocalVarDecl),
    Assignment(AssignmentStmt),
    CaseGroup(CaseGroupStmt),
    Method(MethodDecl),
    Invocation(MethodInvocation),
}

impl Construct {
    /// Position used for source ordering.
    pub fn start_pos(&self) -> Pos {
        match self {
            Construct::Field(f) => f.name.pos,
            Construct::Param(p) => p.first.pos,
            Construct::LocalVar(v) => v.name.pos,
            Construct::Assignment(a) => a.eq.pos,
            Construct::CaseGroup(c) => c.first_stmt.pos,
            Construct::Method(m) => m.decl_first,
            Construct::Invocation(i) => i.lparen,
        }
    }
}
