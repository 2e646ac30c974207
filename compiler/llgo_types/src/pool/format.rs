//! Type formatting for diagnostics.
//!
//! Renders descriptors in source syntax. Output is for humans only; ABI
//! names are produced by the namer, never from this text.

use crate::{ChanDir, Idx, Pool, Tag};

impl Pool {
    /// Format a type as a human-readable string.
    pub fn format_type(&self, idx: Idx) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, buf: &mut String) {
        if !self.contains(idx) {
            buf.push_str("<none>");
            return;
        }

        match self.tag(idx) {
            Tag::Basic => buf.push_str(&self.basic_kind(idx).to_string()),

            Tag::Pointer => {
                buf.push('*');
                self.format_type_into(self.elem(idx), buf);
            }
            Tag::Slice => {
                buf.push_str("[]");
                self.format_type_into(self.elem(idx), buf);
            }
            Tag::Array => {
                buf.push('[');
                buf.push_str(&self.array_len(idx).to_string());
                buf.push(']');
                self.format_type_into(self.elem(idx), buf);
            }
            Tag::Map => {
                buf.push_str("map[");
                self.format_type_into(self.map_key(idx), buf);
                buf.push(']');
                self.format_type_into(self.map_value(idx), buf);
            }
            Tag::Chan => {
                buf.push_str(match self.chan_dir(idx) {
                    ChanDir::SendRecv => "chan ",
                    ChanDir::SendOnly => "chan<- ",
                    ChanDir::RecvOnly => "<-chan ",
                });
                self.format_type_into(self.elem(idx), buf);
            }

            Tag::Signature => {
                buf.push_str("func");
                self.format_signature_into(idx, buf);
            }
            Tag::Struct => {
                buf.push_str("struct{");
                for (i, field) in self.struct_fields(idx).enumerate() {
                    if i > 0 {
                        buf.push_str("; ");
                    }
                    if !field.is_embedded() {
                        buf.push_str(field.name);
                        buf.push(' ');
                    }
                    self.format_type_into(field.ty, buf);
                }
                buf.push('}');
            }
            Tag::Interface => {
                buf.push_str("interface{");
                for (i, method) in self.interface_methods(idx).enumerate() {
                    if i > 0 {
                        buf.push_str("; ");
                    }
                    buf.push_str(method.name);
                    self.format_signature_into(method.sig, buf);
                }
                buf.push('}');
            }
            Tag::Tuple => {
                buf.push('(');
                self.format_list_into(&self.tuple_elems(idx), buf);
                buf.push(')');
            }

            Tag::Named => {
                let pkg = self.named_pkg(idx);
                if !pkg.is_empty() {
                    buf.push_str(pkg);
                    buf.push('.');
                }
                buf.push_str(self.named_name(idx));
            }
            Tag::TypeParam => buf.push_str(self.type_param_name(idx)),
        }
    }

    /// Format `(params) results` for a signature, without the `func` keyword.
    fn format_signature_into(&self, sig: Idx, buf: &mut String) {
        let params = self.signature_params(sig);
        let variadic = self.signature_is_variadic(sig);

        buf.push('(');
        for (i, &param) in params.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            if variadic && i + 1 == params.len() && self.tag(param) == Tag::Slice {
                buf.push_str("...");
                self.format_type_into(self.elem(param), buf);
            } else {
                self.format_type_into(param, buf);
            }
        }
        buf.push(')');

        let results = self.signature_results(sig);
        match results.as_slice() {
            [] => {}
            [single] => {
                buf.push(' ');
                self.format_type_into(*single, buf);
            }
            many => {
                buf.push_str(" (");
                self.format_list_into(many, buf);
                buf.push(')');
            }
        }
    }

    fn format_list_into(&self, elems: &[Idx], buf: &mut String) {
        for (i, &elem) in elems.iter().enumerate() {
            if i > 0 {
                buf.push_str(", ");
            }
            self.format_type_into(elem, buf);
        }
    }
}
