//! Construct extraction.
//!
//! A single engine-owned pass over the immutable token stream that discovers
//! the constructs the checking facets care about: fields, parameters, local
//! variables, assignments, case-group statements, method declarations, and
//! method invocations. This replaces a host-provided AST visitor with a
//! pull-style scan the engine fully controls.
//!
//! The pass is lenient about statements outside the modeled construct set
//! (they are skipped), but strict about delimiter balance and truncated
//! declarations: those abort the file rather than desynchronize every
//! downstream line number.

use crate::construct::{
    AssignmentStmt, CaseGroupStmt, Construct, FieldDecl, LocalVarDecl, MethodDecl,
    MethodInvocation, ParamDecl, PosTok, ScopeId,
};
use crate::errors::{CheckError, ErrorReporting, ScanContext, SourceContext};
use crate::token::{Pos, Token, TokenKind};

const MODIFIERS: [&str; 12] = [
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "synchronized",
    "native",
    "transient",
    "volatile",
    "strictfp",
    "default",
];

const PRIMITIVES: [&str; 9] = [
    "boolean", "byte", "char", "short", "int", "long", "float", "double", "void",
];

const ASSIGN_OPS: [&str; 12] = [
    "=", "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "<<=", ">>=", ">>>=",
];

/// Extract all constructs from `tokens` in source order.
pub fn extract(tokens: &[Token], context: &SourceContext) -> Result<Vec<Construct>, CheckError> {
    Extractor::new(tokens, context).run()
}

/// The extraction pass. Comments are transparent to it; the raw stream keeps
/// them for the facets that need them.
pub struct Extractor<'t> {
    toks: Vec<&'t Token>,
    i: usize,
    next_scope: ScopeId,
    last_line: u32,
    ctx: ScanContext,
    out: Vec<Construct>,
}

fn postok(t: &Token) -> PosTok {
    PosTok::new(t.pos, t.lexeme.clone())
}

impl<'t> Extractor<'t> {
    pub fn new(tokens: &'t [Token], context: &SourceContext) -> Self {
        Self {
            toks: tokens.iter().filter(|t| !t.is_comment()).collect(),
            i: 0,
            next_scope: 0,
            last_line: 1,
            ctx: ScanContext::new(context.clone(), "extract"),
            out: Vec::new(),
        }
    }

    /// Run the pass to completion, yielding constructs in source order.
    pub fn run(mut self) -> Result<Vec<Construct>, CheckError> {
        self.compilation_unit()?;
        let mut out = self.out;
        out.sort_by_key(|c| c.start_pos());
        Ok(out)
    }

    // ------------------------------------------------------------------
    // cursor primitives
    // ------------------------------------------------------------------

    fn peek(&self) -> Option<&'t Token> {
        self.toks.get(self.i).copied()
    }

    fn peek_at(&self, ahead: usize) -> Option<&'t Token> {
        self.toks.get(self.i + ahead).copied()
    }

    fn bump(&mut self) -> Option<&'t Token> {
        let t = self.peek()?;
        self.i += 1;
        self.last_line = t.pos.line;
        Some(t)
    }

    fn at(&self, lexeme: &str) -> bool {
        self.peek().is_some_and(|t| t.lexeme == lexeme)
    }

    fn at_ident(&self) -> bool {
        self.peek().is_some_and(|t| t.kind == TokenKind::Identifier)
    }

    fn eat(&mut self, lexeme: &str) -> bool {
        if self.at(lexeme) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn fresh_scope(&mut self) -> ScopeId {
        self.next_scope += 1;
        self.next_scope
    }

    fn eof_err(&self, expected: &str) -> CheckError {
        let pos = self
            .toks
            .last()
            .map(|t| t.pos)
            .unwrap_or_else(|| Pos::new(1, 1));
        let span = self.ctx.source.span_at(pos, 1);
        self.ctx.unexpected_end(expected, span)
    }

    fn unbalanced_err(&self, t: &Token) -> CheckError {
        let span = self.ctx.source.span_at(t.pos, 1);
        self.ctx.unbalanced(&t.lexeme, span)
    }

    // ------------------------------------------------------------------
    // top level and type bodies
    // ------------------------------------------------------------------

    fn compilation_unit(&mut self) -> Result<(), CheckError> {
        while let Some(t) = self.peek() {
            match t.lexeme.as_str() {
                "package" | "import" => self.skip_to_semi(),
                "class" | "interface" | "enum" => self.type_decl()?,
                "}" | ")" | "]" => return Err(self.unbalanced_err(t)),
                _ => {
                    // modifiers, annotations, stray tokens
                    self.bump();
                }
            }
        }
        Ok(())
    }

    fn skip_to_semi(&mut self) {
        while let Some(t) = self.bump() {
            if t.lexeme == ";" {
                return;
            }
        }
    }

    fn type_decl(&mut self) -> Result<(), CheckError> {
        self.bump();
        loop {
            match self.peek() {
                None => return Err(self.eof_err("'{'")),
                Some(t) if t.lexeme == "{" => break,
                Some(t) if t.lexeme == "<" => {
                    if !self.skip_angles() {
                        self.bump();
                    }
                }
                _ => {
                    self.bump();
                }
            }
        }
        self.bump();
        let scope = self.fresh_scope();
        self.type_body(scope)
    }

    fn type_body(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        loop {
            match self.peek() {
                None => return Err(self.eof_err("'}'")),
                Some(t) if t.lexeme == "}" => {
                    self.bump();
                    return Ok(());
                }
                Some(t) if t.lexeme == ";" => {
                    self.bump();
                }
                _ => self.member(scope)?,
            }
        }
    }

    fn member(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        let Some(first) = self.peek() else {
            return Err(self.eof_err("member declaration"));
        };
        let start = first.pos;
        self.skip_annotations_and_modifiers(scope)?;
        match self.peek() {
            None => Err(self.eof_err("member declaration")),
            Some(t) if matches!(t.lexeme.as_str(), "class" | "interface" | "enum") => {
                self.type_decl()
            }
            Some(t) if t.lexeme == "{" => {
                // instance or static initializer block
                self.bump();
                let inner = self.fresh_scope();
                self.block_body(inner)?;
                Ok(())
            }
            Some(t) if t.lexeme == "<" => {
                // generic method type parameters
                if !self.skip_angles() {
                    self.bump();
                }
                self.member_sig(scope, start)
            }
            _ => self.member_sig(scope, start),
        }
    }

    fn member_sig(&mut self, scope: ScopeId, start: Pos) -> Result<(), CheckError> {
        // constructor: bare identifier directly followed by '('
        if let (Some(t0), Some(t1)) = (self.peek(), self.peek_at(1)) {
            if t0.kind == TokenKind::Identifier && t1.lexeme == "(" {
                let name = postok(t0);
                let name_line = t0.pos.line;
                self.bump();
                return self.method_rest(scope, start, None, name_line, name);
            }
        }
        let Some((ty_first, ty_end_line)) = self.try_type_ref() else {
            return self.skip_member_statement();
        };
        let Some(name_tok) = self.peek().filter(|t| t.kind == TokenKind::Identifier) else {
            return self.skip_member_statement();
        };
        let name = postok(name_tok);
        self.bump();
        if self.at("(") {
            self.method_rest(scope, start, Some(ty_first), ty_end_line, name)
        } else {
            self.declarators(scope, start, name, true)
        }
    }

    fn skip_annotations_and_modifiers(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        loop {
            if self.at("@") {
                self.bump();
                if self.at_ident() {
                    self.bump();
                }
                if self.at("(") {
                    self.skip_parens(scope)?;
                }
            } else if self
                .peek()
                .is_some_and(|t| MODIFIERS.contains(&t.lexeme.as_str()))
            {
                self.bump();
            } else {
                return Ok(());
            }
        }
    }

    /// Skip a member-level statement the construct model does not cover.
    fn skip_member_statement(&mut self) -> Result<(), CheckError> {
        loop {
            match self.peek() {
                None => return Ok(()),
                Some(t) if t.lexeme == ";" => {
                    self.bump();
                    return Ok(());
                }
                Some(t) if t.lexeme == "{" => {
                    self.bump();
                    let inner = self.fresh_scope();
                    return self.block_body(inner);
                }
                Some(t) if t.lexeme == "}" => return Ok(()),
                _ => {
                    self.bump();
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // fields and local variables
    // ------------------------------------------------------------------

    /// Parse declarators after the first name; shared by fields and locals.
    fn declarators(
        &mut self,
        scope: ScopeId,
        start: Pos,
        first_name: PosTok,
        is_field: bool,
    ) -> Result<(), CheckError> {
        let mut decls: Vec<(PosTok, Option<PosTok>)> = Vec::new();
        let mut name = first_name;
        loop {
            while self.at("[") {
                self.bump();
                self.eat("]");
            }
            let eq = if self.at("=") {
                let t = self.peek().map(postok);
                self.bump();
                t
            } else {
                None
            };
            if eq.is_some() {
                self.scan_expr(scope, &[",", ";"])?;
            }
            decls.push((name, eq));
            if !self.eat(",") {
                break;
            }
            match self.peek().filter(|t| t.kind == TokenKind::Identifier) {
                Some(t) => {
                    name = postok(t);
                    self.bump();
                }
                None => break,
            }
        }
        let end_line = match self.peek() {
            Some(t) if t.lexeme == ";" => {
                let line = t.pos.line;
                self.bump();
                line
            }
            _ => self.last_line,
        };
        for (idx, (name, init_eq)) in decls.into_iter().enumerate() {
            let start_line = if idx == 0 { start.line } else { name.pos.line };
            let construct = if is_field {
                Construct::Field(FieldDecl {
                    scope,
                    name,
                    init_eq,
                    start_line,
                    end_line,
                })
            } else {
                Construct::LocalVar(LocalVarDecl {
                    scope,
                    name,
                    init_eq,
                    start_line,
                    end_line,
                })
            };
            self.out.push(construct);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // methods
    // ------------------------------------------------------------------

    fn method_rest(
        &mut self,
        scope: ScopeId,
        decl_start: Pos,
        return_type: Option<PosTok>,
        return_type_end_line: u32,
        name: PosTok,
    ) -> Result<(), CheckError> {
        let Some(lp) = self.peek() else {
            return Err(self.eof_err("'('"));
        };
        let lparen = lp.pos;
        self.bump();
        let list = self.fresh_scope();
        let mut params = Vec::new();
        let rparen;
        loop {
            match self.peek() {
                None => return Err(self.eof_err("')'")),
                Some(t) if t.lexeme == ")" => {
                    rparen = t.pos;
                    self.bump();
                    break;
                }
                Some(t) if t.lexeme == "," => {
                    self.bump();
                }
                _ => self.param(list, &mut params)?,
            }
        }
        // throws clause and anything else up to the body or terminator
        while let Some(t) = self.peek() {
            if t.lexeme == "{" || t.lexeme == ";" || t.lexeme == "}" {
                break;
            }
            self.bump();
        }
        let (body_open, end_line) = match self.peek() {
            Some(t) if t.lexeme == "{" => {
                let open = postok(t);
                self.bump();
                let body = self.fresh_scope();
                self.block_body(body)?;
                (Some(open), self.last_line)
            }
            Some(t) if t.lexeme == ";" => {
                let line = t.pos.line;
                self.bump();
                (None, line)
            }
            _ => (None, rparen.line),
        };
        for p in &params {
            self.out.push(Construct::Param(p.clone()));
        }
        self.out.push(Construct::Method(MethodDecl {
            scope,
            decl_first: decl_start,
            return_type,
            return_type_end_line,
            name,
            params,
            lparen,
            rparen,
            body_open,
            start_line: decl_start.line,
            end_line,
        }));
        Ok(())
    }

    fn param(&mut self, list: ScopeId, params: &mut Vec<ParamDecl>) -> Result<(), CheckError> {
        while self.at("@") {
            self.bump();
            if self.at_ident() {
                self.bump();
            }
            if self.at("(") {
                self.skip_parens(list)?;
            }
        }
        while self.eat("final") {}
        let Some(first_tok) = self.peek() else {
            return Err(self.eof_err("parameter"));
        };
        let first = postok(first_tok);
        if self.try_type_ref().is_none() {
            return self.skip_param();
        }
        // varargs ellipsis
        while self.eat(".") {}
        let Some(name_tok) = self.peek().filter(|t| t.kind == TokenKind::Identifier) else {
            return self.skip_param();
        };
        let name = postok(name_tok);
        self.bump();
        while self.at("[") {
            self.bump();
            self.eat("]");
        }
        params.push(ParamDecl { list, first, name });
        self.skip_param()
    }

    /// Consume leftovers up to the next top-level ',' or ')' of a parameter
    /// list, without consuming either.
    fn skip_param(&mut self) -> Result<(), CheckError> {
        let mut depth = 0usize;
        loop {
            let Some(t) = self.peek() else { return Ok(()) };
            match t.lexeme.as_str() {
                "(" | "[" | "<" => {
                    depth += 1;
                    self.bump();
                }
                ")" if depth == 0 => return Ok(()),
                "," if depth == 0 => return Ok(()),
                ")" | "]" | ">" => {
                    depth = depth.saturating_sub(1);
                    self.bump();
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // statements
    // ------------------------------------------------------------------

    fn block_body(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        loop {
            match self.peek() {
                None => return Err(self.eof_err("'}'")),
                Some(t) if t.lexeme == "}" => {
                    self.bump();
                    return Ok(());
                }
                _ => self.statement(scope)?,
            }
        }
    }

    /// Parse exactly one statement. Never consumes `}`, `case` or `default`
    /// belonging to an enclosing body.
    fn statement(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        let Some(t) = self.peek() else {
            return Err(self.eof_err("statement"));
        };
        match t.lexeme.as_str() {
            ";" => {
                self.bump();
                Ok(())
            }
            "{" => {
                self.bump();
                let inner = self.fresh_scope();
                self.block_body(inner)
            }
            "switch" => self.switch_stmt(scope),
            "if" | "while" | "for" | "synchronized" | "catch" => {
                self.bump();
                if self.at("(") {
                    self.skip_parens(scope)?;
                }
                Ok(())
            }
            "do" | "else" | "try" | "finally" => {
                self.bump();
                Ok(())
            }
            "return" | "throw" | "assert" => {
                self.bump();
                self.scan_expr(scope, &[";"])?;
                self.eat(";");
                Ok(())
            }
            "break" | "continue" => {
                self.bump();
                if self.at_ident() {
                    self.bump();
                }
                self.eat(";");
                Ok(())
            }
            "new" => {
                self.scan_expr(scope, &[";"])?;
                self.eat(";");
                Ok(())
            }
            // only valid inside a switch body; tolerated elsewhere
            "case" | "default" => {
                self.bump();
                Ok(())
            }
            _ => self.decl_or_expr(scope),
        }
    }

    fn decl_or_expr(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        let Some(start_tok) = self.peek() else {
            return Err(self.eof_err("statement"));
        };
        let start = start_tok.pos;
        let save = self.i;
        if self.try_type_ref().is_some() {
            let follows_decl = match (self.peek(), self.peek_at(1)) {
                (Some(n), Some(f)) if n.kind == TokenKind::Identifier => {
                    matches!(f.lexeme.as_str(), "=" | ";" | "," | "[")
                }
                _ => false,
            };
            if follows_decl {
                let name = self.peek().map(postok);
                self.bump();
                if let Some(name) = name {
                    return self.declarators(scope, start, name, false);
                }
            }
            self.i = save;
        }
        self.expr_statement(scope, start)
    }

    /// An expression statement; records the first top-level assignment
    /// operator, if any, and every invocation it contains.
    fn expr_statement(&mut self, scope: ScopeId, start: Pos) -> Result<(), CheckError> {
        let mut eq: Option<PosTok> = None;
        let mut depth = 0usize;
        let end_line;
        loop {
            let Some(t) = self.peek() else {
                end_line = self.last_line;
                break;
            };
            match t.lexeme.as_str() {
                ";" if depth == 0 => {
                    end_line = t.pos.line;
                    self.bump();
                    break;
                }
                "}" if depth == 0 => {
                    end_line = self.last_line;
                    break;
                }
                "(" | "[" | "{" => {
                    depth += 1;
                    self.bump();
                }
                ")" | "]" | "}" => {
                    depth = depth.saturating_sub(1);
                    self.bump();
                }
                op if depth == 0 && eq.is_none() && ASSIGN_OPS.contains(&op) => {
                    eq = Some(postok(t));
                    self.bump();
                }
                _ if t.kind == TokenKind::Identifier => {
                    self.chain_and_maybe_call(scope)?;
                }
                _ => {
                    self.bump();
                }
            }
        }
        if let Some(eq) = eq {
            self.out.push(Construct::Assignment(AssignmentStmt {
                scope,
                eq,
                start_line: start.line,
                end_line,
            }));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // switch bodies and case groups
    // ------------------------------------------------------------------

    fn switch_stmt(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        self.bump();
        if self.at("(") {
            self.skip_parens(scope)?;
        }
        loop {
            match self.peek() {
                None => return Err(self.eof_err("'{'")),
                Some(t) if t.lexeme == "{" => {
                    self.bump();
                    break;
                }
                _ => {
                    self.bump();
                }
            }
        }
        let sw = self.fresh_scope();
        self.switch_body(sw)
    }

    fn switch_body(&mut self, sw: ScopeId) -> Result<(), CheckError> {
        loop {
            let Some(t) = self.peek() else {
                return Err(self.eof_err("'}'"));
            };
            match t.lexeme.as_str() {
                "}" => {
                    self.bump();
                    return Ok(());
                }
                "case" => {
                    self.bump();
                    self.case_label()?;
                }
                "default" => {
                    self.bump();
                    self.eat(":");
                }
                _ => self.case_group(sw)?,
            }
        }
    }

    /// Consume a case label's expression through its ':'.
    fn case_label(&mut self) -> Result<(), CheckError> {
        let mut depth = 0usize;
        loop {
            let Some(t) = self.peek() else {
                return Err(self.eof_err("':'"));
            };
            match t.lexeme.as_str() {
                "(" => {
                    depth += 1;
                    self.bump();
                }
                ")" => {
                    depth = depth.saturating_sub(1);
                    self.bump();
                }
                ":" if depth == 0 => {
                    self.bump();
                    return Ok(());
                }
                "}" => return Ok(()),
                _ => {
                    self.bump();
                }
            }
        }
    }

    /// The statements following a run of labels; the first one is the
    /// case-group-statement construct.
    fn case_group(&mut self, sw: ScopeId) -> Result<(), CheckError> {
        let Some(first) = self.peek() else {
            return Err(self.eof_err("statement"));
        };
        let first_stmt = postok(first);
        let start_line = first.pos.line;
        let scope = self.fresh_scope();
        loop {
            match self.peek() {
                None => return Err(self.eof_err("'}'")),
                Some(t) if matches!(t.lexeme.as_str(), "case" | "default" | "}") => break,
                _ => self.statement(scope)?,
            }
        }
        self.out.push(Construct::CaseGroup(CaseGroupStmt {
            switch: sw,
            first_stmt,
            start_line,
            end_line: self.last_line,
        }));
        Ok(())
    }

    // ------------------------------------------------------------------
    // expressions
    // ------------------------------------------------------------------

    /// Scan an expression up to a top-level stop token (not consumed),
    /// recording every invocation encountered.
    fn scan_expr(&mut self, scope: ScopeId, stops: &[&str]) -> Result<(), CheckError> {
        let mut depth = 0usize;
        loop {
            let Some(t) = self.peek() else { return Ok(()) };
            let lexeme = t.lexeme.as_str();
            if depth == 0 && (stops.contains(&lexeme) || lexeme == "}") {
                return Ok(());
            }
            match lexeme {
                "(" | "[" | "{" => {
                    depth += 1;
                    self.bump();
                }
                ")" | "]" | "}" => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                    self.bump();
                }
                _ if t.kind == TokenKind::Identifier => {
                    self.chain_and_maybe_call(scope)?;
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    /// Consume a dotted identifier chain; if a '(' follows, record the
    /// invocation and its argument list.
    fn chain_and_maybe_call(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        self.bump();
        loop {
            let dotted = self.at(".")
                && self
                    .peek_at(1)
                    .is_some_and(|t| t.kind == TokenKind::Identifier);
            if !dotted {
                break;
            }
            self.bump();
            self.bump();
        }
        if self.at("(") {
            self.arg_list(scope)?;
        }
        Ok(())
    }

    /// Parse a '(...)' argument list, recording the invocation construct and
    /// recursing into nested calls.
    fn arg_list(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        let Some(lp) = self.peek() else {
            return Err(self.eof_err("'('"));
        };
        let lparen = lp.pos;
        self.bump();
        let mut args: Vec<PosTok> = Vec::new();
        let rparen;
        loop {
            match self.peek() {
                None => return Err(self.eof_err("')'")),
                Some(t) if t.lexeme == ")" => {
                    rparen = t.pos;
                    self.bump();
                    break;
                }
                Some(t) => {
                    args.push(postok(t));
                    self.scan_expr(scope, &[","])?;
                    self.eat(",");
                }
            }
        }
        self.out.push(Construct::Invocation(MethodInvocation {
            scope,
            lparen,
            rparen,
            args,
        }));
        Ok(())
    }

    /// Skip a balanced parenthesized region, still recording invocations.
    fn skip_parens(&mut self, scope: ScopeId) -> Result<(), CheckError> {
        self.bump();
        let mut depth = 1usize;
        loop {
            let Some(t) = self.peek() else {
                return Err(self.eof_err("')'"));
            };
            match t.lexeme.as_str() {
                "(" => {
                    depth += 1;
                    self.bump();
                }
                ")" => {
                    depth -= 1;
                    self.bump();
                    if depth == 0 {
                        return Ok(());
                    }
                }
                _ if t.kind == TokenKind::Identifier => {
                    self.chain_and_maybe_call(scope)?;
                }
                _ => {
                    self.bump();
                }
            }
        }
    }

    // ------------------------------------------------------------------
    // type references
    // ------------------------------------------------------------------

    /// Try to consume a type reference (dotted name, generics, array
    /// brackets). Restores the cursor and returns `None` when the tokens at
    /// the cursor cannot be a type.
    fn try_type_ref(&mut self) -> Option<(PosTok, u32)> {
        let save = self.i;
        let t = self.peek()?;
        let is_type_start = t.kind == TokenKind::Identifier
            || (t.kind == TokenKind::Keyword && PRIMITIVES.contains(&t.lexeme.as_str()));
        if !is_type_start {
            return None;
        }
        let first = postok(t);
        let mut end_line = t.pos.line;
        self.bump();
        loop {
            if self.at(".")
                && self
                    .peek_at(1)
                    .is_some_and(|t| t.kind == TokenKind::Identifier)
            {
                self.bump();
                if let Some(id) = self.bump() {
                    end_line = id.pos.line;
                }
            } else if self.at("<") {
                if !self.skip_angles() {
                    self.i = save;
                    return None;
                }
                end_line = self.last_line;
            } else if self.at("[") && self.peek_at(1).is_some_and(|t| t.lexeme == "]") {
                self.bump();
                if let Some(rb) = self.bump() {
                    end_line = rb.pos.line;
                }
            } else {
                break;
            }
        }
        Some((first, end_line))
    }

    /// Try to consume a balanced generic argument list. Only tokens legal in
    /// type context are accepted, which keeps comparison chains like `a < b`
    /// from being mistaken for generics. Restores the cursor on failure.
    fn skip_angles(&mut self) -> bool {
        let save = self.i;
        let mut depth = 0i32;
        while let Some(t) = self.peek() {
            match t.lexeme.as_str() {
                "<" => {
                    depth += 1;
                    self.bump();
                }
                ">" => {
                    depth -= 1;
                    self.bump();
                    if depth <= 0 {
                        return true;
                    }
                }
                ">>" => {
                    depth -= 2;
                    self.bump();
                    if depth <= 0 {
                        return true;
                    }
                }
                "," | "." | "?" | "extends" | "super" | "[" | "]" => {
                    self.bump();
                }
                _ if t.kind == TokenKind::Identifier
                    || PRIMITIVES.contains(&t.lexeme.as_str()) =>
                {
                    self.bump();
                }
                _ => {
                    self.i = save;
                    return false;
                }
            }
        }
        self.i = save;
        false
    }
}
